use directory_view::DirectoryView;
use file_manager_host::PageBootstrap;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp(page: PageBootstrap) -> impl IntoView {
    provide_meta_context();

    let PageBootstrap {
        listing,
        current_path,
        routes,
    } = page;
    let title = format!("Index of {current_path}");
    let stylesheet = routes.resource("css/file_manager.css");

    view! {
        <Title text=title />
        <Stylesheet href=stylesheet />

        <main class="site-root">
            <DirectoryView listing=listing current_path=current_path routes=routes />
        </main>
    }
}
