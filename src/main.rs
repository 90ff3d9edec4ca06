use std::process::ExitCode;

use tilescroll::DemoBuilder;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("tilescroll starting...");

    match DemoBuilder::new().with_title("tilescroll").with_media_dir("./media").run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
