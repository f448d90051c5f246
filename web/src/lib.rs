use clap::Parser;
use wasm_bindgen::prelude::*;

pub use theme::Theme;

mod game;
mod theme;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a color theme instead of following the system preference
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,
}

/// Arguments are read from the location hash, e.g. `#-vv&--theme=dark`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    let args = location_hash.split(['#', '&']).filter(|arg| !arg.is_empty());
    Args::try_parse_from(std::iter::once(env!("CARGO_PKG_NAME")).chain(args))
}

/// Mounts the game widget into `root`.
pub fn render_into(root: web_sys::Element, theme: Theme) {
    theme.apply();
    yew::Renderer::<game::GameView>::with_root_and_props(root, game::GameProps { theme }).render();
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match parse_args(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }

    let theme = args.theme.unwrap_or_else(Theme::preferred);
    log::debug!("theme: {:?}", theme);

    let Some(root) = document().get_element_by_id("game") else {
        log::error!("Could not find id=\"game\" element, nothing to mount");
        return;
    };

    log::debug!("App started");
    render_into(root, theme);
}
