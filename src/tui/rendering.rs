use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::{Field, MessageType, StatusMessage};
use super::layout::AppLayout;
use super::theme::Palette;
use crate::history::HistoryLog;
use crate::models::{ALL_MODES, Conversion, ConversionMode, Hemisphere};
use crate::share;

/// Everything the renderer needs from the application state
pub struct RenderState<'a> {
    pub mode: ConversionMode,
    pub input1: &'a str,
    pub input2: &'a str,
    pub zone: &'a str,
    pub hemisphere: Hemisphere,
    pub focus: Field,
    pub result: Option<&'a Conversion>,
    pub error: Option<&'a str>,
    pub history: &'a HistoryLog,
    pub status_message: Option<&'a StatusMessage>,
    pub visits: u64,
    pub palette: &'a Palette,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_mode_bar(frame, layout.mode_area, state);
    render_form(frame, layout.form_area, state);
    render_results(frame, layout.results_area, state);
    render_history(frame, layout.history_area, state);
    render_status_bar(frame, layout.status_area, state);
}

fn render_mode_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let palette = state.palette;
    let mut spans = Vec::new();

    for (idx, mode) in ALL_MODES.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(palette.border)));
        }
        let style = if mode == state.mode {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.text_muted)
        };
        spans.push(Span::styled(mode.label(), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(" Mode (←/→) "),
    );
    frame.render_widget(paragraph, area);
}

fn field_line<'a>(label: &str, value: &str, focused: bool, palette: &Palette) -> Line<'a> {
    let value_style = if focused {
        Style::default().fg(palette.accent).bg(palette.highlight_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text)
    };
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(palette.text_muted)),
        Span::styled(format!(" {value} "), value_style),
    ])
}

fn render_form(frame: &mut Frame, area: Rect, state: &RenderState) {
    let palette = state.palette;
    let (label1, label2) = state.mode.input_labels();

    let mut lines = vec![
        field_line(label1, state.input1, state.focus == Field::Input1, palette),
        field_line(label2, state.input2, state.focus == Field::Input2, palette),
    ];

    if state.mode.uses_utm() {
        lines.push(field_line("Zone", state.zone, state.focus == Field::Zone, palette));
        lines.push(field_line(
            "Hemisphere",
            &state.hemisphere.to_string(),
            state.focus == Field::Hemisphere,
            palette,
        ));
        if state.focus == Field::Hemisphere {
            lines.push(Line::from(Span::styled(
                "            space toggles, n/s selects",
                Style::default().fg(palette.text_muted),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(" Input "),
    );
    frame.render_widget(paragraph, area);
}

fn render_results(frame: &mut Frame, area: Rect, state: &RenderState) {
    let palette = state.palette;
    let mut lines = Vec::new();

    if let Some(error) = state.error {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(palette.error).add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(conversion) = state.result {
        let (label1, label2) = state.mode.output_labels();
        lines.push(Line::from(vec![
            Span::styled(format!("{label1:<12}"), Style::default().fg(palette.text_muted)),
            Span::styled(
                conversion.output1.clone(),
                Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("{label2:<12}"), Style::default().fg(palette.text_muted)),
            Span::styled(
                conversion.output2.clone(),
                Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            share::maps_url(conversion.latitude, conversion.longitude),
            Style::default().fg(palette.text_muted),
        )));
        lines.push(Line::from(Span::styled(
            "^Y copy result · ^G copy map link · ^W copy WhatsApp link",
            Style::default().fg(palette.text_muted),
        )));
    } else if state.error.is_none() {
        lines.push(Line::from(Span::styled(
            "Enter two coordinates and press Enter.",
            Style::default().fg(palette.text_muted),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(" Result "),
    );
    frame.render_widget(paragraph, area);
}

fn render_history(frame: &mut Frame, area: Rect, state: &RenderState) {
    let palette = state.palette;

    let items: Vec<ListItem> = if state.history.is_empty() {
        vec![ListItem::new("No conversions yet").style(Style::default().fg(palette.text_muted))]
    } else {
        state
            .history
            .iter()
            .map(|entry| {
                // Session history is same-day by construction, so time of day is enough
                let time = entry.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S");
                let content = format!(
                    "{time}  {:<10}  {} → {}",
                    entry.mode.label(),
                    entry.input_text,
                    entry.output_text
                );
                ListItem::new(content).style(Style::default().fg(palette.text))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!(" History ({}) · ^X clears ", state.history.len())),
    );
    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let palette = state.palette;

    let line = if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => palette.success,
            MessageType::Error => palette.error,
        };
        Line::from(Span::styled(message.text.clone(), Style::default().fg(color)))
    } else {
        Line::from(vec![
            Span::styled(
                "Esc quit · ←/→ mode · Tab field · Enter convert · ^T theme",
                Style::default().fg(palette.text_muted),
            ),
            Span::styled(
                format!("  │  visit #{}", state.visits),
                Style::default().fg(palette.text_muted),
            ),
        ])
    };

    frame.render_widget(Paragraph::new(line), area);
}
