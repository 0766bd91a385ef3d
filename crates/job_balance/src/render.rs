use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::info;

use crate::dimension::Dimension;
use crate::error::{BalanceError, Result};
use crate::evaluate::Evaluation;
use crate::geometry::Point;
use crate::view::ViewState;

const FONT: &str = "Arial, sans-serif";
const LINE_CS_COLOR: &str = "#2563eb";
const LINE_AI_COLOR: &str = "#f59e0b";
const ARROW_COLOR: &str = "#9aa3af";

/// SVG output options
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub show_ticks: bool,
    pub show_values: bool,
    pub show_gap_arrow: bool,
    pub show_status: bool,
    pub thumb_radius_px: f64,
    pub gap_row_height_px: f64,
    pub status_height_px: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_ticks: true,
            show_values: true,
            show_gap_arrow: true,
            show_status: true,
            thumb_radius_px: 7.0,
            gap_row_height_px: 32.0,
            status_height_px: 36.0,
        }
    }
}

/// HTML encode (SVG text)
pub fn html_encode(text: &str) -> String {
    text.replace("&", "&amp;")
        .replace("<", "&lt;")
        .replace(">", "&gt;")
        .replace("\"", "&quot;")
        .replace("'", "&#x27;")
}

/// Write the full diagram for `view` and its evaluation.
pub fn render_svg<W: Write>(
    w: &mut W,
    view: &ViewState,
    eval: &Evaluation,
    opt: &RenderOptions,
) -> Result<()> {
    let layout = view.layout();
    let mut height = layout.height();
    if opt.show_gap_arrow {
        height += opt.gap_row_height_px;
    }
    if opt.show_status {
        height += opt.status_height_px;
    }

    writeln!(
        w,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"##,
        layout.width, height, layout.width, height
    )?;
    writeln!(
        w,
        r##"<rect x="0" y="0" width="{:.0}" height="{:.0}" fill="#fff"/>"##,
        layout.width, height
    )?;

    for dim in Dimension::all() {
        render_track(w, view, eval, dim, opt)?;
    }

    render_line(w, "lineCS", eval.control_support.start, eval.control_support.end, LINE_CS_COLOR)?;
    render_line(
        w,
        "lineAI",
        eval.accountability_influence.start,
        eval.accountability_influence.end,
        LINE_AI_COLOR,
    )?;

    for (_, p) in eval.points.iter() {
        writeln!(
            w,
            r##"<circle cx="{:.2}" cy="{:.2}" r="{:.1}" fill="#111827" stroke="#fff" stroke-width="2"/>"##,
            p.x, p.y, opt.thumb_radius_px
        )?;
    }

    let mut y = layout.height();
    if opt.show_gap_arrow {
        render_gap_arrow(w, view, eval, y + opt.gap_row_height_px / 2.0)?;
        y += opt.gap_row_height_px;
    }
    if opt.show_status {
        render_status(w, eval, layout.margin, y, layout.width - 2.0 * layout.margin, opt)?;
    }

    writeln!(w, "</svg>")?;
    Ok(())
}

fn render_track<W: Write>(
    w: &mut W,
    view: &ViewState,
    eval: &Evaluation,
    dim: Dimension,
    opt: &RenderOptions,
) -> Result<()> {
    let track = view.track(dim);
    let range = &view.ranges()[dim];
    let cy = track.center_y();

    // label sits above the track
    writeln!(
        w,
        r##"<text x="{:.2}" y="{:.2}" font-family="{FONT}" font-size="13px" font-weight="bold" fill="#111827">{}</text>"##,
        track.left,
        track.top - 6.0,
        html_encode(dim.as_ref())
    )?;

    if opt.show_values {
        writeln!(
            w,
            r##"<text x="{:.2}" y="{:.2}" font-family="{FONT}" font-size="13px" text-anchor="end" fill="#111827">{}</text>"##,
            track.right(),
            track.top - 6.0,
            eval.values[dim]
        )?;
    }

    writeln!(
        w,
        r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#d1d5db" stroke-width="4" stroke-linecap="round"/>"##,
        track.left,
        cy,
        track.right(),
        cy
    )?;

    // thumbs, band and ticks share the slider's effective range
    let (min, max) = range.effective();
    let span = (max - min) as f64;
    let value_x = |v: i32| track.left + (v - min) as f64 / span * track.width;
    writeln!(
        w,
        r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#9ca3af" stroke-width="4" stroke-linecap="round"/>"##,
        value_x(range.band.min),
        cy,
        value_x(range.band.max),
        cy
    )?;

    if opt.show_ticks {
        // a slider locked to its band has no positions outside it
        for tick in range.ticks().iter().filter(|t| (min..=max).contains(&t.value)) {
            let opacity = if tick.active { "1" } else { "0.3" };
            writeln!(
                w,
                r##"<text x="{:.2}" y="{:.2}" font-family="{FONT}" font-size="10px" text-anchor="middle" fill="#374151" opacity="{}">{}</text>"##,
                value_x(tick.value),
                track.top + track.height + 12.0,
                opacity,
                tick.value
            )?;
        }
    }
    Ok(())
}

fn render_line<W: Write>(w: &mut W, id: &str, a: Point, b: Point, color: &str) -> Result<()> {
    writeln!(
        w,
        r##"<line id="{id}" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{color}" stroke-width="3"/>"##,
        a.x, a.y, b.x, b.y
    )?;
    Ok(())
}

fn render_gap_arrow<W: Write>(w: &mut W, view: &ViewState, eval: &Evaluation, cy: f64) -> Result<()> {
    let track = view.track(Dimension::Control);
    let x0 = track.left + eval.gap.left * track.width;
    let x1 = track.left + eval.gap.right * track.width;

    writeln!(w, r##"<g id="gapArrow">"##)?;
    writeln!(
        w,
        r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{ARROW_COLOR}" stroke-width="3" opacity="0.9"/>"##,
        x0, cy, x1, cy
    )?;
    if eval.gap.heads_visible() {
        writeln!(
            w,
            r##"<polygon points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="{ARROW_COLOR}"/>"##,
            x0,
            cy,
            x0 + 10.0,
            cy - 6.0,
            x0 + 10.0,
            cy + 6.0
        )?;
        writeln!(
            w,
            r##"<polygon points="{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}" fill="{ARROW_COLOR}"/>"##,
            x1,
            cy,
            x1 - 10.0,
            cy - 6.0,
            x1 - 10.0,
            cy + 6.0
        )?;
    }
    writeln!(w, "</g>")?;
    Ok(())
}

fn render_status<W: Write>(
    w: &mut W,
    eval: &Evaluation,
    x: f64,
    y: f64,
    width: f64,
    opt: &RenderOptions,
) -> Result<()> {
    let (class, fill, stroke) = if eval.balanced {
        ("ok", "#dcfce7", "#16a34a")
    } else {
        ("bad", "#fee2e2", "#dc2626")
    };
    let h = opt.status_height_px - 8.0;
    writeln!(w, r##"<g id="status" class="{class}">"##)?;
    writeln!(
        w,
        r##"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="6" ry="6" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"##,
        x, y, width, h
    )?;
    writeln!(
        w,
        r##"<text x="{:.2}" y="{:.2}" font-family="{FONT}" font-size="14px" dominant-baseline="middle" fill="{stroke}">{} {}</text>"##,
        x + 12.0,
        y + h / 2.0,
        eval.status_icon(),
        html_encode(eval.status_text())
    )?;
    writeln!(w, "</g>")?;
    Ok(())
}

/// Render `view` to `output_path`, creating the parent directory.
pub fn save_svg(view: &ViewState, opt: &RenderOptions, output_path: &Path) -> Result<()> {
    if let Some(dir) = output_path.parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir).map_err(|e| BalanceError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| BalanceError::CreateFile {
        path: output_path.to_path_buf(),
        source: e,
    })?;
    let mut f = BufWriter::new(file);
    let eval = view.evaluate();
    render_svg(&mut f, view, &eval, opt)?;
    f.flush()?;

    info!("wrote {}", output_path.display());
    Ok(())
}

/// Render into `output_dir` under a timestamped file name.
pub fn save_svg_to_dir(view: &ViewState, opt: &RenderOptions, output_dir: &Path) -> Result<PathBuf> {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let path = output_dir.join(format!("balance_{timestamp}.svg"));
    save_svg(view, opt, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{Band, DimensionRange, PerDimension, Ranges};
    use crate::layout::Layout;
    use tempfile::TempDir;

    fn view(c: i32, a: i32, i: i32, s: i32) -> ViewState {
        let values = PerDimension::from_fn(|dim| match dim {
            Dimension::Control => c,
            Dimension::Accountability => a,
            Dimension::Influence => i,
            Dimension::Support => s,
        });
        ViewState::new(Ranges::default(), Layout::default()).with_values(values)
    }

    fn render_to_string(view: &ViewState, opt: &RenderOptions) -> String {
        let mut buf = Vec::new();
        render_svg(&mut buf, view, &view.evaluate(), opt).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_html_encode() {
        assert_eq!(html_encode("a<b & 'c'"), "a&lt;b &amp; &#x27;c&#x27;");
    }

    #[test]
    fn test_svg_contains_lines_and_status() {
        let svg = render_to_string(&view(3, 7, 3, 7), &RenderOptions::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains(r#"id="lineCS""#));
        assert!(svg.contains(r#"id="lineAI""#));
        assert!(svg.contains(r#"class="ok""#));
        assert!(svg.contains("This job is balanced (X-test)."));
        for dim in Dimension::all() {
            assert!(svg.contains(&dim.to_string()));
        }
    }

    #[test]
    fn test_imbalanced_status() {
        let svg = render_to_string(&view(2, 6, 9, 5), &RenderOptions::default());
        assert!(svg.contains(r#"class="bad""#));
        assert!(svg.contains("This job is imbalanced (X-test)."));
    }

    #[test]
    fn test_gap_arrow_heads_hidden_when_equal() {
        let svg = render_to_string(&view(5, 5, 5, 5), &RenderOptions::default());
        assert!(svg.contains(r#"id="gapArrow""#));
        assert!(!svg.contains("<polygon"));

        let svg = render_to_string(&view(2, 8, 5, 5), &RenderOptions::default());
        assert_eq!(svg.matches("<polygon").count(), 2);
    }

    #[test]
    fn test_options_disable_sections() {
        let opt = RenderOptions {
            show_ticks: false,
            show_gap_arrow: false,
            show_status: false,
            ..Default::default()
        };
        let svg = render_to_string(&view(2, 8, 5, 5), &opt);
        assert!(!svg.contains("gapArrow"));
        assert!(!svg.contains(r#"id="status""#));
        assert!(!svg.contains(r#"opacity="0.3""#));
    }

    #[test]
    fn test_inactive_ticks_dimmed() {
        let ranges: Ranges = PerDimension::from_fn(|dim| {
            DimensionRange::new(dim, Band::new(3, 7).unwrap(), false).unwrap()
        });
        let view = ViewState::new(ranges, Layout::default());
        let svg = render_to_string(&view, &RenderOptions::default());
        // 0,1,2,8,9,10 dimmed on each of the four tracks
        assert_eq!(svg.matches(r#"opacity="0.3""#).count(), 6 * 4);
    }

    #[test]
    fn test_locked_ticks_follow_thumb() {
        let ranges: Ranges = PerDimension::from_fn(|dim| {
            DimensionRange::new(dim, Band::new(2, 6).unwrap(), true).unwrap()
        });
        let values = PerDimension::from_fn(|_| 6);
        let view = ViewState::new(ranges, Layout::default()).with_values(values);
        let svg = render_to_string(&view, &RenderOptions::default());

        let thumb_x = format!(r#"x="{:.2}""#, view.point(Dimension::Control).x);
        let tick_six = svg
            .lines()
            .find(|l| l.contains(r#"font-size="10px""#) && l.ends_with(">6</text>"))
            .unwrap();
        assert!(tick_six.contains(&thumb_x), "{tick_six} vs {thumb_x}");

        // only 2..=6 are drawn, none dimmed
        let ticks = svg.lines().filter(|l| l.contains(r#"font-size="10px""#)).count();
        assert_eq!(ticks, 5 * 4);
        assert!(!svg.contains(r#"opacity="0.3""#));
        assert!(!svg.contains(">10</text>"));
    }

    #[test]
    fn test_save_svg_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("nested").join("diagram.svg");
        save_svg(&view(1, 2, 3, 4), &RenderOptions::default(), &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert!(content.contains("lineCS"));
    }

    #[test]
    fn test_save_svg_to_dir_timestamped() {
        let temp_dir = TempDir::new().unwrap();
        let path = save_svg_to_dir(&view(1, 2, 3, 4), &RenderOptions::default(), temp_dir.path())
            .unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("balance_"));
        assert!(name.ends_with(".svg"));
        assert!(path.exists());
    }
}
