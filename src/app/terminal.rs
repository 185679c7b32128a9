use crate::core::landing::LandingPage;
use crate::domain::model::{
    CounterAnimation, Effect, Feedback, FeedbackKind, PageEvent, SubmissionOutcome,
};
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep, sleep_until, Instant};

/// Something the terminal should print.
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalLine {
    Message { kind: FeedbackKind, text: String },
    MessageFading,
    MessageCleared,
    Counter { value: i64, settled: bool },
    Heart,
    ScrolledTo(String),
    Info(String),
}

impl TerminalLine {
    /// 中間的計數畫面不印出，只留最後一格
    pub fn render(&self) -> Option<String> {
        match self {
            TerminalLine::Message { kind, text } => Some(format!("[{}] {}", kind.as_str(), text)),
            TerminalLine::MessageFading | TerminalLine::MessageCleared => None,
            TerminalLine::Counter { value, settled } => {
                settled.then(|| format!("👥 {} on the waitlist", value))
            }
            TerminalLine::Heart => Some("💕".to_string()),
            TerminalLine::ScrolledTo(section) => Some(format!("↓ #{}", section)),
            TerminalLine::Info(text) => Some(text.clone()),
        }
    }
}

/// Presenter that turns every visual into timed terminal lines.
///
/// Timers run as detached tokio tasks; the only thing they share with the page
/// is the output channel.
pub struct TerminalPresenter {
    handle: Handle,
    lines: UnboundedSender<TerminalLine>,
}

impl TerminalPresenter {
    pub fn new(handle: Handle, lines: UnboundedSender<TerminalLine>) -> Self {
        Self { handle, lines }
    }

    /// Presenter plus a task printing its lines to stdout.
    pub fn stdout(handle: Handle) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let printer = handle.spawn(print_lines(rx));
        (Self::new(handle, tx), printer)
    }

    pub fn info(&self, text: impl Into<String>) {
        send(&self.lines, TerminalLine::Info(text.into()));
    }

    fn spawn_after(&self, delay: std::time::Duration, line: TerminalLine) {
        let lines = self.lines.clone();
        self.handle.spawn(async move {
            sleep(delay).await;
            send(&lines, line);
        });
    }
}

// 接收端關閉代表正在結束，忽略即可
fn send(lines: &UnboundedSender<TerminalLine>, line: TerminalLine) {
    if lines.send(line).is_err() {
        tracing::trace!("Terminal output closed, dropping line");
    }
}

async fn print_lines(mut rx: UnboundedReceiver<TerminalLine>) {
    while let Some(line) = rx.recv().await {
        match line.render() {
            Some(text) => println!("{}", text),
            None => tracing::trace!("{:?}", line),
        }
    }
}

impl Presenter for TerminalPresenter {
    fn show_feedback(&mut self, feedback: &Feedback) {
        send(
            &self.lines,
            TerminalLine::Message {
                kind: feedback.kind,
                text: feedback.message.clone(),
            },
        );

        let lines = self.lines.clone();
        let (fade_after, fade_for) = (feedback.fade_after, feedback.fade_for);
        self.handle.spawn(async move {
            sleep(fade_after).await;
            send(&lines, TerminalLine::MessageFading);
            sleep(fade_for).await;
            send(&lines, TerminalLine::MessageCleared);
        });
    }

    fn animate_counter(&mut self, animation: CounterAnimation) {
        let lines = self.lines.clone();
        self.handle.spawn(async move {
            sleep(animation.start_after).await;
            let start = Instant::now();
            let last = animation.frames.len().saturating_sub(1);
            for (i, frame) in animation.frames.into_iter().enumerate() {
                sleep_until(start + frame.at).await;
                send(
                    &lines,
                    TerminalLine::Counter {
                        value: frame.value,
                        settled: i == last,
                    },
                );
            }
        });
    }

    fn clear_input(&mut self) {
        tracing::trace!("Email input cleared");
    }

    fn play_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FloatingHeart(heart) => {
                self.spawn_after(heart.delay, TerminalLine::Heart);
                let lifetime = heart.delay + heart.lifetime;
                self.handle.spawn(async move {
                    sleep(lifetime).await;
                    tracing::trace!("Heart at x={:.0} removed", heart.left_px);
                });
            }
            Effect::Reveal { target, delay } => {
                self.handle.spawn(async move {
                    sleep(delay).await;
                    tracing::debug!("Revealed {:?}", target);
                });
            }
            other => tracing::trace!("Effect not rendered in terminal: {:?}", other),
        }
    }

    fn scroll_to(&mut self, section_id: &str) {
        send(&self.lines, TerminalLine::ScrolledTo(section_id.to_string()));
    }
}

/// Read stdin-like input line by line; every line is an Enter on the email input.
///
/// `:list`, `:count`, `:scroll` and `:quit` are handled as commands. Returns at end of input.
pub async fn run<R>(page: &mut LandingPage<TerminalPresenter>, input: R) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut input_lines = input.lines();

    while let Some(line) = input_lines.next_line().await? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":list" => {
                let emails = serde_json::to_string_pretty(page.waitlist())?;
                page.presenter().info(emails);
            }
            ":count" => {
                let text = format!(
                    "display counter: {}, collected this session: {}",
                    page.display_count(),
                    page.waitlist().len()
                );
                page.presenter().info(text);
            }
            ":scroll" => {
                page.handle_event(PageEvent::ScrollIndicatorClicked);
            }
            _ => {
                let outcome = page.handle_event(PageEvent::KeyDown {
                    key: "Enter".to_string(),
                    on_email_input: true,
                    value: line,
                });
                if outcome == Some(SubmissionOutcome::RejectedInvalidFormat) {
                    tracing::debug!("Input did not look like an email");
                }
            }
        }
    }

    tracing::info!(
        "👋 Session ended with {} email(s) collected",
        page.waitlist().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LandingConfig;
    use std::time::Duration;

    #[test]
    fn test_render_hides_intermediate_counter_frames() {
        assert_eq!(
            TerminalLine::Counter {
                value: 12,
                settled: false
            }
            .render(),
            None
        );
        assert_eq!(
            TerminalLine::Counter {
                value: 247,
                settled: true
            }
            .render(),
            Some("👥 247 on the waitlist".to_string())
        );
        assert_eq!(TerminalLine::MessageCleared.render(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_feedback_is_cleared_after_fade() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut presenter = TerminalPresenter::new(Handle::current(), tx);
        let start = Instant::now();

        presenter.show_feedback(&Feedback {
            message: "hello".to_string(),
            kind: FeedbackKind::Success,
            fade_after: Duration::from_millis(6000),
            fade_for: Duration::from_millis(300),
        });

        assert!(matches!(
            rx.recv().await,
            Some(TerminalLine::Message { .. })
        ));
        assert_eq!(rx.recv().await, Some(TerminalLine::MessageFading));
        assert!(start.elapsed() >= Duration::from_millis(6000));
        assert_eq!(rx.recv().await, Some(TerminalLine::MessageCleared));
        assert!(start.elapsed() >= Duration::from_millis(6300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_processes_lines_until_quit() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let presenter = TerminalPresenter::new(Handle::current(), tx);
        let mut page = LandingPage::with_seed(LandingConfig::default(), presenter, 1);

        let input: &[u8] = b"a@b.com\nnot-an-email\na@b.com\n:count\n:quit\nc@d.org\n";
        run(&mut page, input).await.unwrap();

        assert_eq!(page.waitlist().emails(), vec!["a@b.com"]);

        let mut messages = Vec::new();
        let mut info = None;
        while let Ok(line) = rx.try_recv() {
            match line {
                TerminalLine::Message { kind, .. } => messages.push(kind),
                TerminalLine::Info(text) => info = Some(text),
                _ => {}
            }
        }
        assert_eq!(
            messages,
            vec![
                FeedbackKind::Success,
                FeedbackKind::Error,
                FeedbackKind::Error
            ]
        );
        assert_eq!(
            info.as_deref(),
            Some("display counter: 1, collected this session: 1")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_printer_drains_pending_timers_before_finishing() {
        let (mut presenter, printer) = TerminalPresenter::stdout(Handle::current());
        let start = Instant::now();

        presenter.show_feedback(&Feedback {
            message: "bye".to_string(),
            kind: FeedbackKind::Success,
            fade_after: Duration::from_millis(6000),
            fade_for: Duration::from_millis(300),
        });
        drop(presenter);

        printer.await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(6300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_list_and_scroll_commands() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let presenter = TerminalPresenter::new(Handle::current(), tx);
        let mut page = LandingPage::with_seed(LandingConfig::default(), presenter, 1);

        let input: &[u8] = b"a@b.com\n  c@d.org  \n:list\n:scroll\n";
        run(&mut page, input).await.unwrap();

        let mut info = None;
        let mut scrolled = Vec::new();
        while let Ok(line) = rx.try_recv() {
            match line {
                TerminalLine::Info(text) => info = Some(text),
                TerminalLine::ScrolledTo(section) => scrolled.push(section),
                _ => {}
            }
        }

        let listed: serde_json::Value = serde_json::from_str(&info.unwrap()).unwrap();
        assert_eq!(
            listed,
            serde_json::json!([{ "email": "a@b.com" }, { "email": "c@d.org" }])
        );
        assert_eq!(scrolled, vec!["about".to_string()]);
        assert_eq!(
            TerminalLine::ScrolledTo("about".to_string()).render(),
            Some("↓ #about".to_string())
        );
    }
}
