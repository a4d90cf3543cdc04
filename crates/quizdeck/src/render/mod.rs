pub mod image_cache;

use eframe::egui::{self, Align2, Color32, FontId, Pos2};

use crate::theme::Theme;
use crate::view::View;

use image_cache::ImageCache;

const PADDING: f32 = 100.0;
const OPTION_INDENT: f32 = 16.0;
const LINE_GAP: f32 = 20.0;

/// Scale relative to a 1920x1080 reference canvas.
pub fn compute_scale(rect: egui::Rect) -> f32 {
    let ref_w = 1920.0;
    let ref_h = 1080.0;
    (rect.width() / ref_w).min(rect.height() / ref_h)
}

pub fn render_view(
    ui: &egui::Ui,
    view: &View<'_>,
    theme: &Theme,
    rect: egui::Rect,
    images: &ImageCache,
) {
    let scale = compute_scale(rect);
    let content_rect = rect.shrink(PADDING * scale);

    match view {
        View::Splash(_) => {}
        View::Unavailable { reason } => draw_status(
            ui,
            theme,
            content_rect,
            scale,
            "Failed to load slides",
            Some(*reason),
        ),
        View::Empty => draw_status(ui, theme, content_rect, scale, "No slides", None),
        View::Answer { text } => {
            draw_centered(ui, text, theme.answer_size * scale, theme.foreground, content_rect);
        }
        View::Image { name } => match images.get(ui.ctx(), name) {
            Some(texture) => draw_image(ui, &texture, content_rect),
            None => draw_status(
                ui,
                theme,
                content_rect,
                scale,
                "Image not found",
                Some(*name),
            ),
        },
        View::Question { text, options } => {
            draw_question(ui, text, options, theme, content_rect, scale);
        }
    }
}

fn draw_centered(ui: &egui::Ui, text: &str, size: f32, color: Color32, rect: egui::Rect) {
    let galley = layout_centered(ui, text, size, color, rect.width());
    let pos = Pos2::new(rect.center().x, rect.center().y - galley.rect.height() / 2.0);
    ui.painter().galley(pos, galley, color);
}

fn layout_centered(
    ui: &egui::Ui,
    text: &str,
    size: f32,
    color: Color32,
    width: f32,
) -> std::sync::Arc<egui::Galley> {
    let mut job = egui::text::LayoutJob::simple(
        text.to_string(),
        FontId::proportional(size),
        color,
        width,
    );
    job.halign = egui::Align::Center;
    ui.painter().layout_job(job)
}

fn draw_question(
    ui: &egui::Ui,
    question: &str,
    options: &[(char, &str)],
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) {
    let color = theme.foreground;
    let question_galley =
        layout_centered(ui, question, theme.question_size * scale, color, rect.width());

    let option_width = rect.width() - OPTION_INDENT * scale;
    let option_galleys: Vec<_> = options
        .iter()
        .map(|(label, text)| {
            ui.painter().layout(
                format!("{label}: {text}"),
                FontId::proportional(theme.option_size * scale),
                color,
                option_width,
            )
        })
        .collect();

    let gap = LINE_GAP * scale;
    let total_height = question_galley.rect.height()
        + option_galleys
            .iter()
            .map(|g| g.rect.height() + gap)
            .sum::<f32>();

    let mut y = (rect.center().y - total_height / 2.0).max(rect.top());
    let question_height = question_galley.rect.height();
    ui.painter()
        .galley(Pos2::new(rect.center().x, y), question_galley, color);
    y += question_height;

    for galley in option_galleys {
        y += gap;
        let height = galley.rect.height();
        ui.painter().galley(
            Pos2::new(rect.left() + OPTION_INDENT * scale, y),
            galley,
            color,
        );
        y += height;
    }
}

fn draw_image(ui: &egui::Ui, texture: &egui::TextureHandle, rect: egui::Rect) {
    let size = texture.size_vec2();
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    let fit = (rect.width() / size.x).min(rect.height() / size.y);
    let image_rect = egui::Rect::from_center_size(rect.center(), size * fit);
    let uv = egui::Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0));
    ui.painter()
        .image(texture.id(), image_rect, uv, Color32::WHITE);
}

fn draw_status(
    ui: &egui::Ui,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
    title: &str,
    detail: Option<&str>,
) {
    let painter = ui.painter();
    painter.text(
        rect.center(),
        Align2::CENTER_BOTTOM,
        title,
        FontId::proportional(theme.status_size * scale),
        theme.foreground,
    );
    if let Some(detail) = detail {
        let galley = layout_centered(
            ui,
            detail,
            theme.status_size * 0.6 * scale,
            theme.muted,
            rect.width(),
        );
        let pos = Pos2::new(rect.center().x, rect.center().y + LINE_GAP * scale);
        painter.galley(pos, galley, theme.muted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_scale() {
        let full_hd = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        assert!((compute_scale(full_hd) - 1.0).abs() < f32::EPSILON);

        let window = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(1280.0, 720.0));
        assert!((compute_scale(window) - 2.0 / 3.0).abs() < 1e-6);

        // narrow windows are width-bound
        let tall = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(960.0, 1080.0));
        assert!((compute_scale(tall) - 0.5).abs() < f32::EPSILON);
    }
}
