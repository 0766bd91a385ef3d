use anyhow::Result;
use job_balance::{
    Dimension, Layout, PerDimension, Ranges, RenderOptions, ViewState, save_svg,
};
use log::info;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    // (name, control, accountability, influence, support)
    let scenarios = [
        ("balanced_x", 3, 7, 3, 7),
        ("imbalanced_same_slant", 2, 6, 9, 5),
        ("even_gap", 5, 5, 5, 5),
        ("wide_gap", 2, 8, 6, 4),
    ];

    let out_dir = PathBuf::from("figs");
    for (name, c, a, i, s) in scenarios {
        let values = PerDimension::from_fn(|dim| match dim {
            Dimension::Control => c,
            Dimension::Accountability => a,
            Dimension::Influence => i,
            Dimension::Support => s,
        });
        let view = ViewState::new(Ranges::default(), Layout::default()).with_values(values);
        let path = out_dir.join(format!("{name}.svg"));
        save_svg(&view, &RenderOptions::default(), &path)?;
        info!("{name}: {}", view.evaluate().status_text());
    }

    info!("All scenarios rendered in figs/ directory");
    Ok(())
}
