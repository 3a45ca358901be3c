use dioxus::prelude::*;

fn main() -> anyhow::Result<()> {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO)?;
    dioxus::launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    ui::App()
}
