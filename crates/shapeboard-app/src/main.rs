//! Native entry point: runs a scripted session and prints the shape panel.

#[cfg(feature = "native")]
fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match shapeboard_app::AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => shapeboard_app::AppConfig::default(),
    };
    log::info!("Starting {}", config.title);

    if let Err(e) = run(config) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
fn run(config: shapeboard_app::AppConfig) -> Result<(), shapeboard_app::SessionError> {
    use shapeboard_core::ShapeTrait;

    let target = config.render_target();
    let mut session = shapeboard_app::Session::new(config.canvas);
    session.mount(Some(target))?;
    session.tick()?;
    println!("{}", session.panel());

    let ids: Vec<String> = session
        .registry()
        .all_shapes()
        .iter()
        .filter_map(|s| s.id().map(str::to_owned))
        .collect();
    let [text_id, rect_id] = ids.as_slice() else {
        log::warn!("Expected two demo shapes, found {}", ids.len());
        return Ok(());
    };

    session.select(&[rect_id])?;
    session.scale(rect_id, 1.5, 1.5)?;
    println!("{}", session.panel());

    session.select(&[text_id, rect_id])?;
    println!("{}", session.panel());

    session.clear_selection()?;
    println!("{}", session.panel());

    session.unmount();
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
