//! SVG 柱状图渲染

use crate::errors::{Result, SGSError};
use crate::models::students::entities::Student;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 150.0;
const Y_MAX: f64 = 100.0;

/// magma 色带上的采样点，由深到浅
const PALETTE: [&str; 8] = [
    "#000004", "#1c1044", "#4f127b", "#812581", "#b5367a", "#e55064", "#fb8761", "#fec287",
];

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// 为每根柱子在色带上均匀取色
fn bar_color(index: usize, count: usize) -> &'static str {
    if count <= 1 {
        return PALETTE[PALETTE.len() / 2];
    }
    let position = index * (PALETTE.len() - 1) / (count - 1);
    PALETTE[position]
}

/// 渲染柱状图，y 轴固定为 [0, 100]
pub fn render_bar_chart(title: &str, x_label: &str, y_label: &str, bars: &[(&str, f64)]) -> String {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + plot_height;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">"#
    ));
    svg.push_str(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="18">{}</text>"#,
        WIDTH / 2.0,
        MARGIN_TOP / 2.0 + 6.0,
        escape_xml(title)
    ));

    // 网格线与刻度
    for tick in (0..=100).step_by(20) {
        let y = baseline - plot_height * f64::from(tick) / Y_MAX;
        svg.push_str(&format!(
            r##"<line x1="{MARGIN_LEFT}" y1="{y}" x2="{}" y2="{y}" stroke="#dddddd"/>"##,
            WIDTH - MARGIN_RIGHT
        ));
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="end" font-size="12">{tick}</text>"#,
            MARGIN_LEFT - 8.0,
            y + 4.0
        ));
    }

    let slot = plot_width / bars.len().max(1) as f64;
    let bar_width = slot * 0.8;
    for (i, (label, value)) in bars.iter().enumerate() {
        let clamped = value.clamp(0.0, Y_MAX);
        let bar_height = plot_height * clamped / Y_MAX;
        let x = MARGIN_LEFT + slot * i as f64 + (slot - bar_width) / 2.0;
        let center = x + bar_width / 2.0;
        svg.push_str(&format!(
            r#"<rect x="{x:.2}" y="{:.2}" width="{bar_width:.2}" height="{bar_height:.2}" fill="{}"><title>{}: {value}</title></rect>"#,
            baseline - bar_height,
            bar_color(i, bars.len()),
            escape_xml(label)
        ));
        svg.push_str(&format!(
            r#"<text x="{center:.2}" y="{:.2}" text-anchor="end" font-size="12" transform="rotate(-45 {center:.2} {:.2})">{}</text>"#,
            baseline + 16.0,
            baseline + 16.0,
            escape_xml(label)
        ));
    }

    // 坐标轴
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{baseline}" stroke="#333333"/>"##
    ));
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{baseline}" x2="{}" y2="{baseline}" stroke="#333333"/>"##,
        WIDTH - MARGIN_RIGHT
    ));
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="14">{}</text>"#,
        MARGIN_LEFT + plot_width / 2.0,
        HEIGHT - 12.0,
        escape_xml(x_label)
    ));
    svg.push_str(&format!(
        r#"<text x="20" y="{0}" text-anchor="middle" font-size="14" transform="rotate(-90 20 {0})">{1}</text>"#,
        MARGIN_TOP + plot_height / 2.0,
        escape_xml(y_label)
    ));
    svg.push_str("</svg>");
    svg
}

/// 绘制学生成绩柱状图，只包含已评分课程
pub fn plot_student_performance(student: &Student) -> Result<String> {
    let bars: Vec<(&str, f64)> = student.graded_courses().collect();
    if bars.is_empty() {
        return Err(SGSError::grades_unavailable(
            "No grades available for plotting",
        ));
    }
    Ok(render_bar_chart(
        &format!("Student {} Performance", student.id),
        "Courses",
        "Grades",
        &bars,
    ))
}
