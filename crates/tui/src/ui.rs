//! Terminal rendering: entry form, daily-totals chart, recent list.

use chrono::{Datelike, NaiveDate};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, List, ListItem, Paragraph};
use ratatui::Frame;

use outlay_core::aggregate::{aggregate_by_day, DailyTotal};
use outlay_core::expense::RECENT_EXPENSES_LIMIT;

use crate::app::{App, FormField};
use crate::client::Expense;

pub fn draw(frame: &mut Frame, app: &App) {
    let [form_area, chart_area, recent_area, status_area] = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(10),
        Constraint::Length(RECENT_EXPENSES_LIMIT as u16 / 2 + 2),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_form(frame, form_area, app);
    draw_chart(frame, chart_area, &app.expenses);
    draw_recent(frame, recent_area, &app.expenses);
    draw_status(frame, status_area, app);
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        form_line("Amount", &app.form.amount, app.focus == FormField::Amount),
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("< {} >", app.form.category())),
        ]),
        form_line("Date", &app.form.date, app.focus == FormField::Date),
        form_line("Note", &app.form.note, app.focus == FormField::Note),
    ];

    let form = Paragraph::new(lines).block(
        Block::bordered().title("Add Expense (Tab: field, ←/→: category, Enter: submit)"),
    );
    frame.render_widget(form, area);
}

fn form_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let value_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value, value_style),
    ])
}

// ---------------------------------------------------------------------------
// Chart
// ---------------------------------------------------------------------------

fn draw_chart(frame: &mut Frame, area: Rect, expenses: &[Expense]) {
    let totals = aggregate_by_day(expenses.iter().map(|e| (e.date, e.amount)));

    if totals.is_empty() {
        // Empty state: a placeholder instead of an empty chart.
        let placeholder =
            Paragraph::new("No data yet").block(Block::bordered().title("Daily Totals"));
        frame.render_widget(placeholder, area);
        return;
    }

    let points = chart_points(&totals);
    let (x_min, x_max) = x_bounds(&points);
    let y_max = totals.iter().map(|t| t.total).fold(0.0, f64::max);

    let datasets = vec![Dataset::default()
        .name("total")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points)];

    let x_labels: Vec<String> = totals
        .iter()
        .map(|t| axis_label(t.day))
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::bordered().title(chart_title(&totals)))
        .x_axis(
            Axis::default()
                .bounds([x_min, x_max])
                .labels(sparse_labels(x_labels)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max * 1.1])
                .labels(vec!["0".to_string(), format!("{:.0}", y_max * 1.1)]),
        );

    frame.render_widget(chart, area);
}

/// `(day, total)` pairs as chart coordinates; the x value is the day's
/// ordinal so consecutive days are evenly spaced.
pub fn chart_points(totals: &[DailyTotal]) -> Vec<(f64, f64)> {
    totals
        .iter()
        .map(|t| (f64::from(t.day.num_days_from_ce()), t.total))
        .collect()
}

/// Short axis label for a day ("MM-dd").
pub fn axis_label(day: NaiveDate) -> String {
    day.format("%m-%d").to_string()
}

/// Chart title carrying the full ISO date range.
pub fn chart_title(totals: &[DailyTotal]) -> String {
    match (totals.first(), totals.last()) {
        (Some(first), Some(last)) => format!("Daily Totals ({} to {})", first.day, last.day),
        _ => "Daily Totals".to_string(),
    }
}

fn x_bounds(points: &[(f64, f64)]) -> (f64, f64) {
    let min = points.first().map(|p| p.0).unwrap_or(0.0);
    let max = points.last().map(|p| p.0).unwrap_or(0.0);
    if min == max {
        // A single day still needs a non-degenerate axis.
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

/// Keep at most first, middle, and last label so the axis stays readable.
fn sparse_labels(labels: Vec<String>) -> Vec<String> {
    match labels.len() {
        0 | 1 | 2 | 3 => labels,
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}

// ---------------------------------------------------------------------------
// Recent list
// ---------------------------------------------------------------------------

fn draw_recent(frame: &mut Frame, area: Rect, expenses: &[Expense]) {
    let items: Vec<ListItem> = recent(expenses)
        .iter()
        .map(|e| ListItem::new(format_recent_line(e)))
        .collect();

    let list = List::new(items).block(Block::bordered().title(format!(
        "Recent (last {RECENT_EXPENSES_LIMIT})"
    )));
    frame.render_widget(list, area);
}

/// The most-recently-dated records, capped. Relies on the server's
/// date-descending order.
pub fn recent(expenses: &[Expense]) -> &[Expense] {
    &expenses[..expenses.len().min(RECENT_EXPENSES_LIMIT)]
}

/// One recent-list line: `date — category — amount (note)`, with the
/// note part omitted when absent.
pub fn format_recent_line(expense: &Expense) -> String {
    let base = format!(
        "{} — {} — {:.2}",
        expense.date.date_naive(),
        expense.category,
        expense.amount
    );

    match &expense.note {
        Some(note) => format!("{base} ({note})"),
        None => base,
    }
}

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.status.as_deref().unwrap_or("Esc to quit");
    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
