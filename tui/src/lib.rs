//! TUI rendering for Sieve using ratatui.

mod input;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use sieve_engine::App;

pub const SEARCH_LABEL: &str = "Search for a fruit";
pub const SEARCH_PLACEHOLDER: &str = "Search items...";
pub const NO_RESULTS: &str = "No results";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Label
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let label = Paragraph::new(Line::from(Span::styled(
        format!(" {SEARCH_LABEL}"),
        styles::label(&palette),
    )));
    frame.render_widget(label, chunks[0]);

    draw_input(frame, app, chunks[1], &palette, &glyphs);
    draw_results(frame, app, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

pub(crate) fn draw_input(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let border_style = if app.phase().is_pending() {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.text_muted)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(palette.bg_panel));

    let prefix = format!(" {} ", glyphs.prompt);
    let prefix_width = prefix.width() as u16;
    let content_width = area
        .width
        .saturating_sub(2)
        .saturating_sub(prefix_width)
        .max(1) as usize;

    let draft = app.draft();
    let cursor_display_pos = draft.text_before_cursor().width();

    // Scroll horizontally so the cursor stays inside the field.
    let (display_text, horizontal_scroll) = if cursor_display_pos >= content_width {
        let text = draft.text();
        let scroll_target = cursor_display_pos - content_width + 1;
        let mut byte_offset = text.len();
        let mut skipped_width = 0;
        for (idx, grapheme) in text.grapheme_indices(true) {
            if skipped_width >= scroll_target {
                byte_offset = idx;
                break;
            }
            skipped_width += grapheme.width();
        }
        (&text[byte_offset..], skipped_width as u16)
    } else {
        (draft.text(), 0u16)
    };

    let content = if draft.is_empty() {
        Span::styled(SEARCH_PLACEHOLDER, styles::placeholder(palette))
    } else {
        Span::styled(display_text, Style::default().fg(palette.text_primary))
    };
    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(palette.primary)),
        content,
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    let cursor_x = area
        .x
        .saturating_add(1 + prefix_width)
        .saturating_add(cursor_display_pos as u16)
        .saturating_sub(horizontal_scroll);
    let cursor_y = area.y.saturating_add(1);
    frame.set_cursor_position((cursor_x, cursor_y));
}

pub(crate) fn draw_results(
    frame: &mut Frame,
    app: &mut App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let visible_rows = area.height.saturating_sub(2) as usize;
    app.set_results_viewport(visible_rows);

    let results = app.results();
    let offset = app.scroll().offset();
    let total = results.len();

    let count = format!(" {total}/{} ", app.items().len());
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .title(Line::from(Span::styled(" Results ", styles::label(palette))))
        .title(
            Line::from(Span::styled(count, Style::default().fg(palette.text_secondary)))
                .right_aligned(),
        );

    let more_above = offset > 0;
    let more_below = offset + visible_rows < total;
    if more_above || more_below {
        let mut hint = String::from(" ");
        if more_above {
            hint.push_str(glyphs.arrow_up);
        }
        if more_below {
            hint.push_str(glyphs.arrow_down);
        }
        hint.push(' ');
        block = block.title_bottom(
            Line::from(Span::styled(hint, styles::key_hint(palette))).right_aligned(),
        );
    }

    let lines: Vec<Line> = if results.is_empty() {
        vec![Line::from(vec![
            Span::styled(
                format!(" {} ", glyphs.empty),
                Style::default().fg(palette.warning),
            ),
            Span::styled(NO_RESULTS, styles::placeholder(palette)),
        ])]
    } else {
        results
            .items()
            .iter()
            .skip(offset)
            .take(visible_rows)
            .map(|item| {
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", glyphs.bullet),
                        Style::default().fg(palette.accent),
                    ),
                    Span::styled(*item, Style::default().fg(palette.text_primary)),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub(crate) fn draw_status_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let phase = app.phase();
    let (status_text, status_style) = if phase.is_pending() {
        let spinner = spinner_frame(app.tick_count(), app.ui_options());
        (
            format!("{spinner} {}...", phase.label()),
            Style::default().fg(palette.primary),
        )
    } else {
        (
            format!("{} {}", glyphs.status_ready, phase.label()),
            Style::default().fg(palette.success),
        )
    };

    let mut spans = vec![Span::raw(" "), Span::styled(status_text, status_style)];

    if app.completed_cycles() > 0 {
        let results = app.results();
        let noun = if results.len() == 1 { "match" } else { "matches" };
        let summary = if results.term().is_empty() {
            format!(" {} {} {noun}", glyphs.separator, results.len())
        } else {
            format!(
                " {} {} {noun} for \"{}\"",
                glyphs.separator,
                results.len(),
                results.term()
            )
        };
        spans.push(Span::styled(summary, Style::default().fg(palette.text_secondary)));
    }

    spans.extend([
        Span::styled(format!(" {} ", glyphs.separator), styles::key_hint(palette)),
        Span::styled(
            format!("{}{}", glyphs.arrow_up, glyphs.arrow_down),
            styles::key_highlight(palette),
        ),
        Span::styled(" scroll  ", styles::key_hint(palette)),
        Span::styled("Ctrl+U", styles::key_highlight(palette)),
        Span::styled(" clear  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" quit", styles::key_hint(palette)),
    ]);

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.bg_dark));
    frame.render_widget(status, area);
}
