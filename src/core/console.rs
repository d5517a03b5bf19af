//! The console controller.
//!
//! Owns the working directory, the output log, the inquiry wizard and the
//! busy flag. Every input line goes through [`Console::submit`] (keyboard)
//! or [`Console::apply_external_command`] (host UI); both share one routing
//! rule:
//!
//! - wizard collecting: the line is the answer to the pending field
//! - otherwise: the line is parsed and executed as a command
//!
//! The inquiry button goes through [`Console::start_inquiry`] instead, which
//! selects the command by kind rather than by name.
//!
//! Synchronous commands finish inside the call. The completion call, the
//! admin request and the inquiry commit come back as a [`PendingTask`]; the
//! host awaits it and hands the [`TaskOutcome`] to [`Console::resolve`].
//! While a task is outstanding the console is busy and ignores input.

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use chrono::Utc;
use futures::future::{FutureExt, LocalBoxFuture};

use crate::config::SUBMIT_DELAY_MS;
use crate::core::commands::{Command, CommandTable, Effect, ExecContext, execute_command};
use crate::core::error::{CompletionError, StorageError};
use crate::core::filesystem::VirtualFs;
use crate::core::history::CommandHistory;
use crate::core::line_log::LineLog;
use crate::core::services::{AdminDecision, Services};
use crate::core::wizard::{InquiryWizard, WizardState, WizardStep};
use crate::models::{CommandKind, InquiryRecord, LogLine, OutputLine, SiteConfig, VirtualPath};
use crate::utils::format::format_shell_label;

/// Notification for the host, raised when a task resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleSignal {
    AdminAccessGranted,
}

/// What a finished [`PendingTask`] produced.
#[derive(Debug)]
pub enum TaskOutcome {
    /// Completion service answer
    Reply(Result<String, CompletionError>),
    /// Inquiry handed to the sink and the submit delay elapsed
    InquiryCommitted {
        record: InquiryRecord,
        result: Result<(), StorageError>,
    },
    AdminDecision(AdminDecision),
}

/// Asynchronous work started by a submission.
///
/// Holds no borrow of the console, so the host can await it while the
/// console stays readable (for rendering the busy state).
pub struct PendingTask {
    future: LocalBoxFuture<'static, TaskOutcome>,
}

impl PendingTask {
    fn new(future: impl Future<Output = TaskOutcome> + 'static) -> Self {
        Self {
            future: future.boxed_local(),
        }
    }

    /// Drive the task to completion.
    pub async fn run(self) -> TaskOutcome {
        self.future.await
    }
}

impl fmt::Debug for PendingTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PendingTask")
    }
}

/// Result of handing one line to the console.
#[must_use]
#[derive(Debug)]
pub enum Submission {
    /// Empty input, or the console was busy. Nothing changed.
    Ignored,
    /// Handled synchronously.
    Completed(Option<ConsoleSignal>),
    /// Await the task, then pass its outcome to [`Console::resolve`].
    Pending(PendingTask),
}

impl Submission {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

pub struct Console {
    fs: Rc<VirtualFs>,
    cwd: VirtualPath,
    log: LineLog,
    wizard: InquiryWizard,
    history: CommandHistory,
    commands: CommandTable,
    config: SiteConfig,
    services: Services,
    busy: bool,
}

impl Console {
    /// Create a console at the root and print the boot lines.
    pub fn new(config: SiteConfig, fs: Rc<VirtualFs>, services: Services) -> Self {
        let config = config.normalized();
        let commands = CommandTable::from_config(config.commands.as_ref());
        let wizard = InquiryWizard::new(config.inquiry_fields.clone());

        let mut log = LineLog::new();
        log.extend(config.boot_lines.iter().map(OutputLine::info));

        Self {
            fs,
            cwd: VirtualPath::root(),
            log,
            wizard,
            history: CommandHistory::new(),
            commands,
            config,
            services,
            busy: false,
        }
    }

    pub fn lines(&self) -> &[LogLine] {
        self.log.snapshot()
    }

    pub fn cwd(&self) -> &VirtualPath {
        &self.cwd
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn wizard_state(&self) -> WizardState {
        self.wizard.state()
    }

    /// Prompt label for the input line.
    pub fn prompt(&self) -> String {
        if self.wizard.is_idle() {
            self.config.prompt(&self.cwd.to_string())
        } else {
            self.config.form_prompt.clone()
        }
    }

    /// Window label, e.g. `v9_shell_/projects`.
    pub fn shell_label(&self) -> String {
        format_shell_label(&self.config.shell_name, &self.cwd.to_string())
    }

    /// Walk command history (negative = older). See [`CommandHistory::navigate`].
    pub fn recall(&mut self, direction: i32) -> Option<String> {
        self.history.navigate(direction)
    }

    /// Handle a line typed by the user.
    pub fn submit(&mut self, line: &str) -> Submission {
        self.dispatch(line, true)
    }

    /// Handle a line issued by the host UI (e.g. a button).
    ///
    /// Same routing and guards as [`Console::submit`], but the line is not
    /// added to command history.
    pub fn apply_external_command(&mut self, line: &str) -> Submission {
        self.dispatch(line, false)
    }

    /// Start the inquiry wizard, whatever the command table calls it.
    ///
    /// Echoes the table's first name for the command (or `inquiry` when the
    /// table has none). Ignored while busy or while a pass is running.
    pub fn start_inquiry(&mut self) -> Submission {
        if self.busy || !self.wizard.is_idle() {
            return Submission::Ignored;
        }
        let echo = self
            .commands
            .aliases(CommandKind::Inquiry)
            .first()
            .map_or_else(|| "inquiry".to_string(), |name| name.to_string());
        self.log.push(OutputLine::command(echo));
        self.execute(Command::Inquiry)
    }

    /// Empty the log without submitting a line.
    ///
    /// Does not count as input, so a running wizard keeps its pending
    /// field. Returns `false` (and does nothing) while busy.
    pub fn clear_screen(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.log.clear();
        true
    }

    /// Submit, await the task if one was started, and resolve it.
    pub async fn run(&mut self, line: &str) -> Option<ConsoleSignal> {
        match self.submit(line) {
            Submission::Pending(task) => {
                let outcome = task.run().await;
                self.resolve(outcome)
            }
            Submission::Completed(signal) => signal,
            Submission::Ignored => None,
        }
    }

    /// Apply a finished task and leave the busy state.
    pub fn resolve(&mut self, outcome: TaskOutcome) -> Option<ConsoleSignal> {
        self.busy = false;
        let messages = &self.config.messages;

        match outcome {
            TaskOutcome::Reply(Ok(text)) => {
                if text.trim().is_empty() {
                    self.log.push(OutputLine::info(&messages.no_data));
                } else {
                    self.log.push(OutputLine::info(text.trim()));
                }
                None
            }
            TaskOutcome::Reply(Err(e)) => {
                log::error!("Completion request failed: {}", e);
                self.log.push(OutputLine::error(&messages.connection_error));
                None
            }
            TaskOutcome::InquiryCommitted { record, result } => {
                match result {
                    Ok(()) => log::info!("Inquiry {} stored", record.id),
                    // The user still sees the success line.
                    Err(e) => log::warn!("Inquiry {} was not stored: {}", record.id, e),
                }
                self.log.push(OutputLine::success(&messages.inquiry_success));
                self.wizard.finish();
                None
            }
            TaskOutcome::AdminDecision(AdminDecision::Granted) => {
                log::info!("Admin access granted");
                self.log.push(OutputLine::success(&messages.admin_granted));
                Some(ConsoleSignal::AdminAccessGranted)
            }
            TaskOutcome::AdminDecision(AdminDecision::Denied) => {
                self.log.push(OutputLine::error(&messages.permission_denied));
                None
            }
        }
    }

    fn dispatch(&mut self, line: &str, record_history: bool) -> Submission {
        let input = line.trim();
        if input.is_empty() {
            return Submission::Ignored;
        }
        if self.busy {
            log::debug!("Console busy, ignoring input");
            return Submission::Ignored;
        }

        if self.wizard.is_collecting() {
            return self.answer_wizard(input);
        }

        if record_history {
            self.history.record(input);
        }
        self.log.push(OutputLine::command(input));

        let cmd = Command::parse(input, &self.commands);
        self.execute(cmd)
    }

    fn execute(&mut self, cmd: Command) -> Submission {
        let ctx = ExecContext {
            fs: self.fs.as_ref(),
            cwd: &self.cwd,
            commands: &self.commands,
            config: &self.config,
        };
        let result = execute_command(cmd, ctx);
        self.log.extend(result.output);

        match result.effect {
            Some(effect) => self.apply_effect(effect),
            None => Submission::Completed(None),
        }
    }

    fn apply_effect(&mut self, effect: Effect) -> Submission {
        match effect {
            Effect::Navigate(path) => {
                self.cwd = path;
                Submission::Completed(None)
            }
            Effect::ClearLog => {
                self.log.clear();
                Submission::Completed(None)
            }
            Effect::StartInquiry => {
                if let Some(prompt) = self.wizard.start() {
                    self.log.push(OutputLine::info(prompt));
                }
                Submission::Completed(None)
            }
            Effect::RequestAdmin => {
                let admin = Rc::clone(&self.services.admin);
                self.begin(async move {
                    TaskOutcome::AdminDecision(admin.request_admin_access().await)
                })
            }
            Effect::Complete(prompt) => {
                let completion = Rc::clone(&self.services.completion);
                let style = self.config.system_prompt.clone();
                self.begin(async move {
                    TaskOutcome::Reply(completion.generate(&prompt, &style).await)
                })
            }
        }
    }

    fn answer_wizard(&mut self, input: &str) -> Submission {
        self.log.push(OutputLine::command(input));

        match self.wizard.accept(input, Utc::now()) {
            WizardStep::Prompt(prompt) => {
                self.log.push(OutputLine::info(prompt));
                Submission::Completed(None)
            }
            WizardStep::Complete(record) => {
                self.log
                    .push(OutputLine::info(&self.config.messages.inquiry_recording));
                let sink = Rc::clone(&self.services.sink);
                let delay = Rc::clone(&self.services.delay);
                self.begin(async move {
                    let result = sink.store(&record).await;
                    delay.sleep(SUBMIT_DELAY_MS).await;
                    TaskOutcome::InquiryCommitted { record, result }
                })
            }
            WizardStep::Rejected => Submission::Completed(None),
        }
    }

    fn begin(&mut self, future: impl Future<Output = TaskOutcome> + 'static) -> Submission {
        self.busy = true;
        Submission::Pending(PendingTask::new(future))
    }
}
