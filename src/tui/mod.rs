//! Interactive terminal front end

pub mod app;
pub mod colors;
pub mod results;
pub mod search;
pub mod ui;

use crate::config::AppConfig;
use crate::logging;
use crate::Catalog;

/// Entry point: take over the terminal and run until the user quits
pub fn run(catalog: Catalog, config: &AppConfig) -> crate::Result<()> {
    let mut terminal =
        ratatui::try_init().map_err(|e| crate::HiliteError::Terminal(e.to_string()))?;
    logging::separator("TUI session");

    let mut app = app::App::new(catalog, config);
    let result = app.run(&mut terminal);

    ratatui::restore();
    finish(&mut app, result)
}

/// Tear the session down however the event loop ended
fn finish(app: &mut app::App, result: crate::Result<()>) -> crate::Result<()> {
    app.session.close();
    if let Err(e) = &result {
        logging::error("TUI", &e.to_string());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HiliteError;
    use std::time::Instant;

    #[test]
    fn failed_loop_still_closes_session() {
        let mut app = app::App::new(Catalog::sample(), &AppConfig::default());
        app.session.set_query("test", Instant::now());
        assert!(app.session.is_debouncing());

        let result = finish(&mut app, Err(HiliteError::Terminal("gone".into())));
        assert!(matches!(result, Err(HiliteError::Terminal(_))));
        assert!(app.session.is_closed());
        assert!(!app.session.is_debouncing());
    }

    #[test]
    fn clean_quit_closes_session() {
        let mut app = app::App::new(Catalog::sample(), &AppConfig::default());
        assert!(finish(&mut app, Ok(())).is_ok());
        assert!(app.session.is_closed());
    }
}
