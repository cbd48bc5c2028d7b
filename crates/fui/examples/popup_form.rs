//! Example: a form, its values and a popup that refuses to close

use fui::{InputConfig, Props, Ui};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let ui = Ui::new();
    ui.body().create("div").attr("id", "popups");

    let form = ui.body().create("form").attr("id", "signup");
    form.create_input(InputConfig::new().label("Full Name"))
        .set("value", "Ada Lovelace");
    form.create_input(InputConfig::new().label("Phone Number").input_type("tel"))
        .set("value", "555-0100");
    form.create_input(InputConfig::new().label("Start Date").input_type("date"))
        .set("value", "2024-03-15");

    let colors = form
        .create_input(InputConfig::new().label("Colors").input_type("select"))
        .set("multiple", true);
    for color in ["red", "green", "blue"] {
        colors.create(("option", Props::new().with("value", color).text(color)));
    }
    colors.set_selected_options(["blue", "green"]);

    form.on("submit", |event| match event.inputs().to_json() {
        Ok(json) => println!("submitted: {json}"),
        Err(err) => tracing::error!("Failed to serialize form: {}", err),
    });
    ui.submit(&ui.find("#signup")?);

    let popup = ui.create_fullscreen_popup().set_dismissible(false);
    popup.set_title("Unsaved changes");
    popup.create("p").text("Save before leaving?");
    let save = popup.create_button().text("Save");
    let backing = popup.backing().id();
    save.on("click", move |event| event.ui().element(backing).remove());

    ui.click(popup.backing());
    println!("after backing click: open={} right={:?}", popup.is_open(), popup.style("right"));

    ui.advance(ui.config().vibrate.dismiss_duration_ms);
    println!("after {}ms: right={:?}", ui.now(), popup.style("right"));

    ui.click(&save);
    println!("after save: open={}", popup.is_open());
    println!("{}", ui.body().outer_html());

    Ok(())
}
