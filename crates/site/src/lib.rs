mod web_app;

pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    if file_manager_web::redirect_to_directory_location() {
        return;
    }
    let page = file_manager_web::load_page_bootstrap();
    leptos::mount_to_body(move || leptos::view! { <SiteApp page=page /> })
}
