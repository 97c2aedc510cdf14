// Entrypoint for the rental portal CLI.
// - Keeps `main` small: resolve config, build the API client and hand a
//   portal to the UI loop.
// - Logging goes through `env_logger`; set `RUST_LOG=debug` to see loads.

use gvk_rental_cli::{api::ApiClient, config::Config, portal::Portal, ui::main_menu};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Base URL from `API_BASE_URL` (or `.env`), read once for the whole run.
    let config = Config::from_env();
    let api = ApiClient::new(&config)?;
    log::info!("using rental API at {}", api.base_url());

    let mut portal = Portal::new(api);
    main_menu(&mut portal)?;
    Ok(())
}
