use anyhow::{Context, Result};

use crate::config::Config;
use crate::formatting::format_layout_report;
use crate::layout::Scoreboard;
use crate::scale::ViewportSize;
use crate::types::MatchDisplayState;

/// Compute the layout for a `width` x `height` px viewport and return the report
pub fn report(config: &Config, state: &MatchDisplayState, width: f64, height: f64) -> Result<String> {
    let design = config.design_size().context("Invalid design size")?;
    let layout = Scoreboard::new(design).layout(state, ViewportSize::new(width, height));
    Ok(format_layout_report(&layout, &config.display()))
}

pub fn run(config: &Config, state: &MatchDisplayState, width: f64, height: f64) -> Result<()> {
    print!("{}", report(config, state, width, height)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_at_reference_size() {
        let report = report(&Config::default(), &MatchDisplayState::default(), 896.0, 512.0).unwrap();
        assert!(report.contains("scale_factor      1.000000"));
        assert!(report.contains("render_width      896.00"));
        assert!(report.contains("E. MORGAN         sets=[0, 0, 0] points=0 indicator=reserve-space"));
    }

    #[test]
    fn test_report_negative_viewport_is_zero_scale() {
        let report = report(&Config::default(), &MatchDisplayState::default(), -10.0, 512.0).unwrap();
        assert!(report.contains("scale_factor      0.000000"));
        assert!(report.contains("render_height     0.00"));
    }

    #[test]
    fn test_report_invalid_design() {
        let mut config = Config::default();
        config.design.width = 0.0;
        let err = report(&config, &MatchDisplayState::default(), 896.0, 512.0).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Invalid design size"));
    }
}
