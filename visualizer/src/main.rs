use benchcore::render::{
    Bar, BarBlock, BarColor, Board, Phase, PollOutcome, ProgressView, RenderConfig, Renderer,
    Summary,
};
use iced::{
    mouse, time,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path},
        column, row, scrollable, text, Column, Container, Row,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer as IcedRenderer, Size,
    Subscription, Task, Theme,
};
use serde::Deserialize;
use std::time::Duration;

const BRIDGE_URL: &str = "http://127.0.0.1:9000";
const DEFAULT_POLL_DELAY_MS: u64 = 10;
const BAR_ROW_HEIGHT: f32 = 20.0;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Ne10 Benchmark Visualizer".into()
}

fn application_subscription(state: &Visualizer) -> Subscription<Message> {
    if state.is_polling() {
        time::every(Duration::from_millis(state.poll_delay_ms)).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

struct Visualizer {
    renderer: Renderer<Board>,
    poll_delay_ms: u64,
    in_flight: bool,
    stopped: bool,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    SuiteFetched(Result<SuiteInfo, String>),
    BatchFetched(Result<String, String>),
    Restart,
    Restarted(Result<(), String>),
}

/// Suite description served by the harness bridge.
#[derive(Debug, Clone, Deserialize)]
struct SuiteInfo {
    #[serde(default)]
    expected_total: Option<usize>,
    #[serde(default = "default_poll_delay_ms")]
    poll_delay_ms: u64,
}

fn default_poll_delay_ms() -> u64 {
    DEFAULT_POLL_DELAY_MS
}

fn started_renderer(config: RenderConfig) -> Renderer<Board> {
    let mut renderer = Renderer::new(Board::new(), config);
    renderer.start();
    renderer
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        (
            Visualizer {
                renderer: started_renderer(RenderConfig::default()),
                poll_delay_ms: DEFAULT_POLL_DELAY_MS,
                in_flight: false,
                stopped: true,
                status: "Contacting bridge...".into(),
                history: Vec::new(),
            },
            Task::perform(fetch_suite(), Message::SuiteFetched),
        )
    }

    fn is_polling(&self) -> bool {
        !self.stopped && self.renderer.phase() != Phase::Finalized
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::SuiteFetched(Ok(info)) => {
                state.apply_suite(&info);
                state.push_history(match info.expected_total {
                    Some(total) => format!("Suite announced {} cases", total),
                    None => "Suite size unknown, waiting for end-of-stream".into(),
                });
                Task::none()
            }
            Message::SuiteFetched(Err(err)) => {
                state.status = format!("Bridge unavailable: {err}");
                Task::none()
            }
            Message::Tick => {
                if state.in_flight || !state.is_polling() {
                    return Task::none();
                }
                state.in_flight = true;
                Task::perform(fetch_batch(), Message::BatchFetched)
            }
            Message::BatchFetched(Ok(payload)) => {
                state.in_flight = false;
                state.ingest(&payload);
                Task::none()
            }
            Message::BatchFetched(Err(err)) => {
                state.in_flight = false;
                state.stopped = true;
                state.status = format!("Bridge error: {err}");
                state.push_history("Polling stopped after bridge error".into());
                Task::none()
            }
            Message::Restart => {
                state.stopped = true;
                Task::perform(post_reset(), Message::Restarted)
            }
            Message::Restarted(Ok(())) => {
                state.push_history("Suite rewound".into());
                Task::perform(fetch_suite(), Message::SuiteFetched)
            }
            Message::Restarted(Err(err)) => {
                state.status = format!("Reset failed: {err}");
                Task::none()
            }
        }
    }

    fn apply_suite(&mut self, info: &SuiteInfo) {
        self.renderer = started_renderer(RenderConfig {
            expected_total: info.expected_total,
        });
        self.poll_delay_ms = info.poll_delay_ms.max(1);
        self.in_flight = false;
        self.stopped = false;
        self.status = "Waiting for results...".into();
    }

    fn ingest(&mut self, payload: &str) {
        match self.renderer.ingest(Some(payload)) {
            Ok(PollOutcome::Continue) => {
                let cases = self.renderer.state().case_count;
                self.status = format!("{} cases rendered", cases);
            }
            Ok(PollOutcome::Finished) => {
                let label = self
                    .renderer
                    .summary()
                    .map(Summary::accelerated_label)
                    .unwrap_or_default();
                self.status = format!("Finished: {}", label);
                self.push_history(format!(
                    "Run finished after {} cases",
                    self.renderer.state().case_count
                ));
            }
            Err(err) => {
                self.stopped = true;
                self.status = format!("Payload error: {err}");
                self.push_history("Polling stopped after malformed payload".into());
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let board = state.renderer.surface();

        let legend = board.legend.as_ref().map_or_else(Row::new, |legend| {
            legend
                .entries
                .iter()
                .fold(Row::new().spacing(16), |row_widget, entry| {
                    row_widget.push(
                        row![swatch(entry.color), text(entry.label.clone()).size(14)]
                            .spacing(6)
                            .align_y(Alignment::Center),
                    )
                })
        });

        let blocks = if board.blocks.is_empty() {
            Column::new().push(text("No results yet").size(14))
        } else {
            board
                .blocks
                .iter()
                .fold(Column::new().spacing(10), |col, block| col.push(block_view(block)))
        };

        let controls_column = column![
            text("Ne10 benchmark").size(26),
            legend,
            progress_view(board.progress.as_ref()),
            summary_view(board.summary.as_ref()),
            button("Restart suite").on_press(Message::Restart).padding(10),
            text(&state.status).size(14),
            text("Activity log").size(16),
            Container::new(scrollable(history_list(&state.history)).height(Length::Fixed(160.0)))
                .padding(6),
        ]
        .spacing(12)
        .padding(16)
        .width(Length::Fixed(360.0));

        let results_column = column![
            text("Results").size(26),
            scrollable(blocks).height(Length::Fill),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fill);

        let layout = row![controls_column, results_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

fn history_list(history: &[String]) -> Column<'_, Message> {
    if history.is_empty() {
        Column::new().push(text("No activity yet").size(12))
    } else {
        history
            .iter()
            .rev()
            .fold(Column::new().spacing(4), |col, entry| {
                col.push(text(entry.clone()).size(12))
            })
    }
}

fn block_view(block: &BarBlock) -> Element<'_, Message> {
    let height = BAR_ROW_HEIGHT * block.bars.len() as f32;
    column![
        text(block.title.clone()).size(16),
        Canvas::new(BarRows {
            bars: block.bars.clone(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(height)),
    ]
    .spacing(4)
    .into()
}

fn progress_view(progress: Option<&ProgressView>) -> Element<'_, Message> {
    let (fraction, display) = match progress {
        Some(view) => (
            view.percent.map(|percent| (percent / 100.0) as f32),
            view.display.clone(),
        ),
        None => (Some(0.0), "0%".to_string()),
    };
    column![
        text(format!("Progress {}", display)).size(16),
        Canvas::new(Meter {
            fraction: fraction.unwrap_or(0.0),
            color: to_color(BarColor::Green),
        })
        .width(Length::Fill)
        .height(Length::Fixed(18.0)),
    ]
    .spacing(4)
    .into()
}

fn summary_view(summary: Option<&Summary>) -> Element<'_, Message> {
    match summary {
        Some(summary) => column![
            text(summary.accelerated_label()).size(18),
            Canvas::new(Meter {
                fraction: 1.0,
                color: to_color(BarColor::Blue),
            })
            .width(Length::Fill)
            .height(Length::Fixed(18.0)),
            text(summary.reference_label()).size(18),
            Canvas::new(Meter {
                fraction: summary
                    .reference_bar_percent()
                    .map(|percent| (percent / 100.0) as f32)
                    .unwrap_or(0.0),
                color: to_color(BarColor::Green),
            })
            .width(Length::Fill)
            .height(Length::Fixed(18.0)),
        ]
        .spacing(4)
        .into(),
        None => text("Result pending").size(16).into(),
    }
}

fn swatch<'a>(color: BarColor) -> Element<'a, Message> {
    Canvas::new(Meter {
        fraction: 1.0,
        color: to_color(color),
    })
    .width(Length::Fixed(14.0))
    .height(Length::Fixed(14.0))
    .into()
}

fn to_color(color: BarColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::from_rgb8(r, g, b)
}

async fn fetch_suite() -> Result<SuiteInfo, String> {
    let response = reqwest::get(format!("{BRIDGE_URL}/suite"))
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<SuiteInfo>()
        .await
        .map_err(|e| e.to_string())
}

async fn fetch_batch() -> Result<String, String> {
    let response = reqwest::get(format!("{BRIDGE_URL}/next"))
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("bridge answered {}", response.status()));
    }
    response.text().await.map_err(|e| e.to_string())
}

async fn post_reset() -> Result<(), String> {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{BRIDGE_URL}/reset"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if response.status().is_success() {
        Ok(())
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_else(|_| "".into());
        Err(format!("{}: {}", status, text))
    }
}

/// Horizontal bars of one block, one row per timing.
#[derive(Clone)]
struct BarRows {
    bars: Vec<Bar>,
}

impl canvas::Program<Message> for BarRows {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &IcedRenderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        for (row_index, bar) in self.bars.iter().enumerate() {
            let top = row_index as f32 * BAR_ROW_HEIGHT + 2.0;
            let width = (bar.width_percent as f32 / 100.0).clamp(0.0, 1.0) * bounds.width;
            let color = to_color(bar.color);
            frame.fill_rectangle(
                Point::new(0.0, top),
                Size::new(width, BAR_ROW_HEIGHT - 4.0),
                color,
            );
            frame.fill_text(canvas::Text {
                content: bar.label.clone(),
                position: Point::new(width + 6.0, top),
                color: Color::WHITE,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Single filled bar covering `fraction` of the width.
#[derive(Clone)]
struct Meter {
    fraction: f32,
    color: Color,
}

impl canvas::Program<Message> for Meter {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &IcedRenderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.12, 0.12, 0.14),
        );
        let width = self.fraction.clamp(0.0, 1.0) * bounds.width;
        let filled = Path::rectangle(Point::ORIGIN, Size::new(width, bounds.height));
        frame.fill(&filled, self.color);

        vec![frame.into_geometry()]
    }
}
