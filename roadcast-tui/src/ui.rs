use ratatui::{
    prelude::*,
    widgets::{Axis, Block, Borders, Chart, Clear, Dataset, GraphType, Paragraph, Wrap},
};
use roadcast_core::{
    model::{Metric, PRECIPITATION_RANGE, Reading, TrendSeries},
    state::Phase,
};

use crate::app::{App, Field};
use crate::backdrop::Backdrop;

const SIDEBAR_WIDTH: u16 = 30;
const FOOTER: &str = "Interactive Weather & Traffic Forecasting dashboard";
const NAV_HINT: &str =
    "Tab/Shift-Tab field · ↑/↓ adjust · Enter Get Forecast · F5/Ctrl-R reload · Esc/Ctrl-C quit";

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let theme = app.view.theme();

    frame.render_widget(Backdrop::new(theme, app.tick, app.effects_enabled), area);

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, body_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new(format!(
        "Weather & Traffic Live Update · {} · theme {} ({})",
        app.dashboard.source().name,
        theme.name,
        theme.background
    ))
    .block(Block::default().borders(Borders::ALL).title("Roadcast"));
    render_solid(frame, header, *header_area);

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(*body_area);

    let [sidebar_area, main_area] = body_chunks.as_ref() else {
        return;
    };

    draw_travel_inputs(frame, app, *sidebar_area);
    draw_main(frame, app, *main_area);

    let status_text = match &app.error_message {
        Some(msg) => format!("{msg} · {NAV_HINT}"),
        None => format!("{NAV_HINT} · {FOOTER}"),
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    render_solid(frame, status, *status_area);
}

/// Clear the area first so the backdrop effect does not bleed through.
fn render_solid<W: Widget>(frame: &mut Frame<'_>, widget: W, area: Rect) {
    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

fn draw_travel_inputs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    frame.render_widget(Clear, area);
    let outer = Block::default().borders(Borders::ALL).title("Travel Inputs");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // date
            Constraint::Length(3), // time
            Constraint::Length(3), // location
            Constraint::Length(3), // button
            Constraint::Min(0),
        ])
        .split(inner);

    let chunks = layout_chunks.as_ref();
    let [date_area, time_area, location_area, button_area, _rest] = chunks else {
        return;
    };

    let fields = [
        (Field::Date, "Select Travel Date", &app.date_input, *date_area),
        (Field::Time, "Select Travel Time", &app.time_input, *time_area),
        (
            Field::Location,
            "Enter Location",
            &app.location_input,
            *location_area,
        ),
    ];

    for (field, title, value, field_area) in fields {
        let focused = app.focus == field;
        let border_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let text = if focused {
            format!("{value}_")
        } else {
            value.clone()
        };
        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
        frame.render_widget(input, field_area);
    }

    let button = Paragraph::new("[ Get Forecast ] (Enter)")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, *button_area);
}

fn draw_main(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // headline
            Constraint::Length(7), // panels
            Constraint::Min(0),    // chart
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [headline_area, panels_area, chart_area] = chunks else {
        return;
    };

    let view = &app.view;
    let headline = Paragraph::new(view.panel_title())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    render_solid(frame, headline, *headline_area);

    let (weather_title, traffic_title) = match view.phase() {
        Phase::Initial => ("Current Weather", "Traffic Update"),
        Phase::ForecastRequested(_) => ("Predicted Weather", "Traffic Prediction"),
    };

    let panel_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(*panels_area);

    if let [weather_area, traffic_area] = panel_chunks.as_ref() {
        let weather = Paragraph::new(weather_lines(&view.reading))
            .block(Block::default().borders(Borders::ALL).title(weather_title))
            .wrap(Wrap { trim: true });
        render_solid(frame, weather, *weather_area);

        let traffic = Paragraph::new(vec![labelled(
            "Traffic Incidents",
            view.reading.traffic.to_string(),
        )])
        .block(Block::default().borders(Borders::ALL).title(traffic_title))
        .wrap(Wrap { trim: true });
        render_solid(frame, traffic, *traffic_area);
    }

    draw_trend(frame, &view.trend, *chart_area);
}

fn weather_lines(reading: &Reading) -> Vec<Line<'static>> {
    vec![
        labelled("Condition", reading.condition.to_string()),
        labelled("Temperature", format!("{}°C", reading.temperature_c)),
        labelled("Wind Speed", format!("{} km/h", reading.wind_speed_kmh)),
        labelled("Precipitation", format!("{}%", reading.precipitation_pct)),
    ]
}

fn labelled(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value),
    ])
}

fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Temperature => Color::Red,
        Metric::WindSpeed => Color::Green,
        Metric::Precipitation => Color::Blue,
    }
}

fn draw_trend(frame: &mut Frame<'_>, trend: &TrendSeries, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Weather Trend Before Travel");

    if trend.is_empty() {
        render_solid(frame, Paragraph::new("No trend data.").block(block), area);
        return;
    }

    let series: Vec<(Metric, Vec<(f64, f64)>)> = Metric::ALL
        .into_iter()
        .map(|metric| (metric, trend.points(metric)))
        .collect();

    let datasets = series
        .iter()
        .map(|(metric, points)| {
            Dataset::default()
                .name(metric.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(metric_color(*metric)))
                .data(points)
        })
        .collect::<Vec<Dataset<'_>>>();

    let last_index = trend.len().saturating_sub(1);
    let x_labels = [0, last_index / 2, last_index]
        .into_iter()
        .filter_map(|index| trend.samples.get(index))
        .map(|sample| sample.at.format("%H:%M").to_string())
        .collect::<Vec<_>>();

    let x_max = f64::from(u32::try_from(last_index).unwrap_or(u32::MAX));
    let y_max = f64::from(*PRECIPITATION_RANGE.end());

    let chart = Chart::new(datasets)
        .block(block.title_bottom("Weather Patterns Over Time"))
        .x_axis(
            Axis::default()
                .title("Time")
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .bounds([0.0, y_max])
                .labels(["0", "50", "100"]),
        );

    render_solid(frame, chart, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Cell};
    use roadcast_core::{
        model::Condition,
        theme::{DEFAULT_THEME, resolve_theme},
    };

    use super::*;
    use crate::app::tests::test_app;
    use crate::backdrop::to_color;

    fn render(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
        terminal
            .draw(|frame| draw(frame, app))
            .expect("draw succeeds");
        terminal
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn corner_background(terminal: &Terminal<TestBackend>) -> Option<Color> {
        terminal.backend().buffer().cell((0, 0)).map(|cell| cell.bg)
    }

    #[test]
    fn initial_render_shows_current_panels_and_trend() {
        let app = test_app(11);
        let terminal = render(&app);
        let text = screen_text(&terminal);

        assert!(text.contains("Current Weather"), "{text}");
        assert!(text.contains("Traffic Update"), "{text}");
        assert!(
            text.contains(&format!("Condition: {}", app.view.reading.condition)),
            "{text}"
        );
        assert!(
            text.contains(&format!("Traffic Incidents: {}", app.view.reading.traffic)),
            "{text}"
        );
        assert!(text.contains("Weather Trend Before Travel"), "{text}");
        assert!(text.contains("Weather Patterns Over Time"), "{text}");
        assert_eq!(app.view.trend.len(), 12);
        assert_eq!(
            corner_background(&terminal),
            Some(to_color(resolve_theme(app.view.reading.condition).background))
        );
    }

    #[test]
    fn forecast_render_names_request_and_follows_new_theme() {
        let mut app = test_app(12);
        app.date_input = "2024-01-01".into();
        app.time_input = "09:00".into();
        app.location_input = "Paris".into();
        app.submit_forecast();

        let terminal = render(&app);
        let text = screen_text(&terminal);

        assert!(
            text.contains("Forecast for Paris on 2024-01-01 at 09:00"),
            "{text}"
        );
        assert!(text.contains("Predicted Weather"), "{text}");
        assert!(text.contains("Traffic Prediction"), "{text}");
        assert!(!text.contains("Current Weather"), "{text}");
        assert_eq!(
            corner_background(&terminal),
            Some(to_color(app.view.theme().background))
        );
    }

    #[test]
    fn snow_renders_on_neutral_background() {
        let mut app = test_app(13);
        app.view.reading.condition = Condition::Snow;

        let terminal = render(&app);

        assert_eq!(
            corner_background(&terminal),
            Some(to_color(DEFAULT_THEME.background))
        );
        assert!(screen_text(&terminal).contains("Condition: Snow"));
    }

    #[test]
    fn input_errors_show_in_status_bar() {
        let mut app = test_app(14);
        app.time_input = "later".into();
        app.submit_forecast();

        let text = screen_text(&render(&app));
        assert!(text.contains("Invalid time 'later'"), "{text}");
    }

    #[test]
    fn trend_axis_is_labelled_with_sample_times() {
        let app = test_app(15);
        let text = screen_text(&render(&app));
        let last = app
            .view
            .trend
            .end()
            .map(|at| at.format("%H:%M").to_string())
            .expect("trend has samples");
        assert!(text.contains(&last), "{text}");
    }
}
