//! Switch orchestration.
//!
//! A [`Switcher`] owns the session memory and a [`Workbench`]. Each request:
//!
//! 1. derives the candidate group from the first matching rule, or from the
//!    session memory when no rule matches the current file
//! 2. filters it (self, missing files, duplicates); an empty result falls
//!    back to quick-open when enabled
//! 3. resolves one target with the command's selection policy
//! 4. remembers `target -> group` when no rule matches the target
//! 5. opens the target, or a diff against the current file
//!
//! Every miss ends the request silently with [`SwitchOutcome::Nothing`].
//! Only failures of the host itself (editor could not be launched) are
//! returned as errors.

use std::fmt;
use std::path::{Path, PathBuf};

use qswitch_core::prelude::*;
use qswitch_core::{
    base_name, derive_keyword, normalize_path, Resolution, RuleSet, Selection, SelectionContext,
    SessionMemory,
};

use crate::config::Settings;
use crate::workbench::{PickItem, Workbench};

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

/// What to do with the resolved target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchAction {
    Open,
    /// Diff with the current file on the left
    CompareAsLeft,
    /// Diff with the current file on the right
    CompareAsRight,
}

/// User-triggerable switch commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchCommand {
    /// Pick among all related files
    Switch,
    Next,
    Previous,
    /// 1-based fixed index shortcut (1-9)
    AtIndex(usize),
    CompareAsLeft,
    CompareAsRight,
}

impl SwitchCommand {
    /// Index shortcut command, validating the 1-9 range.
    pub fn at_index(number: usize) -> Result<Self> {
        Selection::shortcut(number)
            .map(|_| SwitchCommand::AtIndex(number))
            .ok_or(Error::InvalidShortcut { index: number })
    }

    pub fn selection(&self) -> Selection {
        match self {
            SwitchCommand::Switch | SwitchCommand::CompareAsLeft | SwitchCommand::CompareAsRight => {
                Selection::Pick
            }
            SwitchCommand::Next => Selection::Next,
            SwitchCommand::Previous => Selection::Previous,
            SwitchCommand::AtIndex(number) => Selection::Index(number.saturating_sub(1)),
        }
    }

    pub fn action(&self) -> SwitchAction {
        match self {
            SwitchCommand::CompareAsLeft => SwitchAction::CompareAsLeft,
            SwitchCommand::CompareAsRight => SwitchAction::CompareAsRight,
            _ => SwitchAction::Open,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Outcomes
// ─────────────────────────────────────────────────────────────────────────────

/// Why a request ended without showing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NothingReason {
    NoActiveFile,
    NoCandidates,
    Cancelled,
    NoSelection,
    TargetMissing,
}

impl NothingReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            NothingReason::NoActiveFile => "no_active_file",
            NothingReason::NoCandidates => "no_candidates",
            NothingReason::Cancelled => "cancelled",
            NothingReason::NoSelection => "no_selection",
            NothingReason::TargetMissing => "target_missing",
        }
    }
}

impl fmt::Display for NothingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one switch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    Opened {
        target: PathBuf,
    },
    Compared {
        left: PathBuf,
        right: PathBuf,
        title: String,
    },
    /// Nothing to switch to; the quick-open fallback ran
    QuickOpen {
        keyword: String,
        opened: Option<PathBuf>,
    },
    Nothing {
        reason: NothingReason,
    },
}

impl SwitchOutcome {
    fn nothing(reason: NothingReason) -> Self {
        SwitchOutcome::Nothing { reason }
    }
}

/// Where a candidate group came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSource {
    Rule,
    Memory,
    None,
}

/// Diff title built from both base names.
pub fn compare_title(left: &Path, right: &Path) -> String {
    format!("{} ↔ {}", base_name(left), base_name(right))
}

// ─────────────────────────────────────────────────────────────────────────────
// Switcher
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level controller holding the session memory.
#[derive(Debug)]
pub struct Switcher<W> {
    workbench: W,
    memory: SessionMemory,
    /// Base for relative paths (the workspace root)
    base: PathBuf,
}

impl<W: Workbench> Switcher<W> {
    pub fn new(workbench: W, base: impl Into<PathBuf>) -> Self {
        Self {
            workbench,
            memory: SessionMemory::new(),
            base: base.into(),
        }
    }

    pub fn workbench(&self) -> &W {
        &self.workbench
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    /// Raw candidate group of `current` and where it came from.
    ///
    /// The first matching rule wins; the memory is only consulted when no
    /// rule matches.
    pub fn candidate_group(&self, rules: &RuleSet, current: &Path) -> (Vec<PathBuf>, GroupSource) {
        if let Some(rule) = rules.first_match(current) {
            trace!("{:?} matched rule {:?}", current, rule.pattern());
            return (rule.expand(current, &self.base), GroupSource::Rule);
        }
        match self.memory.lookup(current) {
            Some(group) => (group.to_vec(), GroupSource::Memory),
            None => (Vec::new(), GroupSource::None),
        }
    }

    /// Effective candidates of `current`, as offered by the picker.
    pub fn candidates(&self, settings: &Settings, current: &Path) -> Vec<PathBuf> {
        let current = normalize_path(current, &self.base);
        let (group, _) = self.candidate_group(&settings.rule_set(), &current);
        SelectionContext::new(current, group, |p| self.workbench.exists(p)).available
    }

    /// Run one switch request from `current`.
    pub async fn run(
        &mut self,
        settings: &Settings,
        current: &Path,
        command: SwitchCommand,
    ) -> Result<SwitchOutcome> {
        if current.as_os_str().is_empty() {
            debug!("No active file, ignoring {:?}", command);
            return Ok(SwitchOutcome::nothing(NothingReason::NoActiveFile));
        }

        let current = normalize_path(current, &self.base);
        let rules = settings.rule_set();
        let (group, source) = self.candidate_group(&rules, &current);
        let ctx = SelectionContext::new(current.clone(), group, |p| self.workbench.exists(p));
        debug!(
            "{:?}: {} candidates from {:?}, {} available",
            current,
            ctx.group.len(),
            source,
            ctx.available.len()
        );

        if !ctx.has_candidates() {
            return self.fallback(settings, &current, command).await;
        }

        let resolution = command.selection().resolve(
            &ctx,
            |p| self.workbench.exists(p),
            settings.picker.auto_select_single,
        );
        let target = match resolution {
            Resolution::Selected(target) => target,
            Resolution::Prompt(candidates) => match self.prompt(&candidates).await {
                Some(target) => target,
                None => {
                    debug!("Pick cancelled");
                    return Ok(SwitchOutcome::nothing(NothingReason::Cancelled));
                }
            },
            Resolution::NoSelection => {
                debug!("{:?} selected nothing", command.selection());
                return Ok(SwitchOutcome::nothing(NothingReason::NoSelection));
            }
        };

        if !self.workbench.exists(&target) {
            debug!("Target {:?} vanished before it could be opened", target);
            return Ok(SwitchOutcome::nothing(NothingReason::TargetMissing));
        }

        if !rules.is_matched(&target) {
            debug!("Remembering group for {:?}", target);
            self.memory.record(target.clone(), ctx.group);
        }

        self.show(&current, target, command.action()).await
    }

    async fn prompt(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        let items = candidates
            .iter()
            .map(|path| PickItem {
                label: self.workbench.relative_path(path),
                path: path.clone(),
            })
            .collect();
        let index = self.workbench.pick(items).await?;
        candidates.get(index).cloned()
    }

    async fn show(
        &self,
        current: &Path,
        target: PathBuf,
        action: SwitchAction,
    ) -> Result<SwitchOutcome> {
        let (left, right) = match action {
            SwitchAction::Open => {
                info!("Opening {:?}", target);
                self.workbench.open(&target).await?;
                return Ok(SwitchOutcome::Opened { target });
            }
            SwitchAction::CompareAsLeft => (current.to_path_buf(), target),
            SwitchAction::CompareAsRight => (target, current.to_path_buf()),
        };

        let title = compare_title(&left, &right);
        info!("Comparing {:?} with {:?}", left, right);
        self.workbench.diff(&left, &right, &title).await?;
        Ok(SwitchOutcome::Compared { left, right, title })
    }

    /// Quick-open fallback for a request without candidates.
    ///
    /// Compare requests need a second file, so they never fall back.
    async fn fallback(
        &self,
        settings: &Settings,
        current: &Path,
        command: SwitchCommand,
    ) -> Result<SwitchOutcome> {
        if !settings.fallback_to_quick_open || command.action() != SwitchAction::Open {
            debug!("No candidates for {:?}", current);
            return Ok(SwitchOutcome::nothing(NothingReason::NoCandidates));
        }

        let keyword = derive_keyword(current, settings.keyword_rule().as_ref());
        info!("No related file for {:?}, quick-open with {:?}", current, keyword);
        let opened = self.workbench.quick_open(&keyword).await?;
        Ok(SwitchOutcome::QuickOpen { keyword, opened })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// In-memory workbench recording every host call.
    #[derive(Debug, Default)]
    struct FakeWorkbench {
        files: Mutex<HashSet<PathBuf>>,
        pick_answer: Option<usize>,
        /// Deleted from `files` while the picker is open
        vanish_on_pick: Option<PathBuf>,
        picks: Mutex<Vec<Vec<PickItem>>>,
        opened: Mutex<Vec<PathBuf>>,
        diffs: Mutex<Vec<(PathBuf, PathBuf, String)>>,
        quick_opens: Mutex<Vec<String>>,
    }

    impl FakeWorkbench {
        fn with_files(files: &[&str]) -> Self {
            Self {
                files: Mutex::new(files.iter().map(PathBuf::from).collect()),
                ..Default::default()
            }
        }
    }

    impl Workbench for FakeWorkbench {
        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains(path)
        }

        fn relative_path(&self, path: &Path) -> String {
            qswitch_core::format_relative_path(path, Path::new("/proj"))
        }

        async fn pick(&self, items: Vec<PickItem>) -> Option<usize> {
            self.picks.lock().unwrap().push(items);
            if let Some(path) = &self.vanish_on_pick {
                self.files.lock().unwrap().remove(path);
            }
            self.pick_answer
        }

        async fn open(&self, path: &Path) -> Result<()> {
            self.opened.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        async fn diff(&self, left: &Path, right: &Path, title: &str) -> Result<()> {
            self.diffs.lock().unwrap().push((
                left.to_path_buf(),
                right.to_path_buf(),
                title.to_string(),
            ));
            Ok(())
        }

        async fn quick_open(&self, keyword: &str) -> Result<Option<PathBuf>> {
            self.quick_opens.lock().unwrap().push(keyword.to_string());
            Ok(None)
        }
    }

    fn settings(rules: &[(&str, &[&str])]) -> Settings {
        Settings {
            rules: rules
                .iter()
                .map(|(pattern, list)| {
                    RuleConfig::new(*pattern, list.iter().map(|s| s.to_string()).collect())
                })
                .collect(),
            ..Default::default()
        }
    }

    fn ts_settings() -> Settings {
        settings(&[(r"(.*)\.ts$", &["$1.ts", "$1.test.ts", "$1.spec.ts"])])
    }

    fn opened(target: &str) -> SwitchOutcome {
        SwitchOutcome::Opened {
            target: PathBuf::from(target),
        }
    }

    #[test]
    fn test_command_mapping() {
        assert_eq!(SwitchCommand::Switch.selection(), Selection::Pick);
        assert_eq!(SwitchCommand::AtIndex(1).selection(), Selection::Index(0));
        assert_eq!(SwitchCommand::CompareAsLeft.selection(), Selection::Pick);
        assert_eq!(SwitchCommand::CompareAsRight.action(), SwitchAction::CompareAsRight);
        assert_eq!(SwitchCommand::Next.action(), SwitchAction::Open);
    }

    #[test]
    fn test_at_index_validation() {
        assert_eq!(SwitchCommand::at_index(3).unwrap(), SwitchCommand::AtIndex(3));
        assert!(matches!(
            SwitchCommand::at_index(0),
            Err(Error::InvalidShortcut { index: 0 })
        ));
        assert!(SwitchCommand::at_index(10).is_err());
    }

    #[test]
    fn test_compare_title() {
        assert_eq!(
            compare_title(Path::new("/p/a.ts"), Path::new("/p/a.test.ts")),
            "a.ts ↔ a.test.ts"
        );
    }

    #[tokio::test]
    async fn test_single_candidate_opens_without_prompt() {
        let workbench = FakeWorkbench::with_files(&["/proj/foo.ts", "/proj/foo.test.ts"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&ts_settings(), Path::new("/proj/foo.ts"), SwitchCommand::Switch)
            .await
            .unwrap();

        assert_eq!(outcome, opened("/proj/foo.test.ts"));
        assert!(switcher.workbench().picks.lock().unwrap().is_empty());
        assert_eq!(
            *switcher.workbench().opened.lock().unwrap(),
            vec![PathBuf::from("/proj/foo.test.ts")]
        );
    }

    #[tokio::test]
    async fn test_multiple_candidates_prompt_with_relative_labels() {
        let mut workbench =
            FakeWorkbench::with_files(&["/proj/foo.ts", "/proj/foo.test.ts", "/proj/foo.spec.ts"]);
        workbench.pick_answer = Some(1);
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&ts_settings(), Path::new("/proj/foo.ts"), SwitchCommand::Switch)
            .await
            .unwrap();

        assert_eq!(outcome, opened("/proj/foo.spec.ts"));
        let picks = switcher.workbench().picks.lock().unwrap();
        let labels: Vec<_> = picks[0].iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["foo.test.ts", "foo.spec.ts"]);
    }

    #[tokio::test]
    async fn test_cancelled_pick_does_nothing() {
        let workbench =
            FakeWorkbench::with_files(&["/proj/foo.ts", "/proj/foo.test.ts", "/proj/foo.spec.ts"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&ts_settings(), Path::new("/proj/foo.ts"), SwitchCommand::Switch)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SwitchOutcome::Nothing {
                reason: NothingReason::Cancelled
            }
        );
        assert!(switcher.workbench().opened.lock().unwrap().is_empty());
        assert!(switcher.memory().is_empty());
    }

    #[tokio::test]
    async fn test_target_deleted_during_pick_does_nothing() {
        let settings = settings(&[(r"(.*)\.h$", &["$1.h", "$1.c", "$1.cc"])]);
        let mut workbench =
            FakeWorkbench::with_files(&["/proj/net.h", "/proj/net.c", "/proj/net.cc"]);
        workbench.pick_answer = Some(0);
        workbench.vanish_on_pick = Some(PathBuf::from("/proj/net.c"));
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&settings, Path::new("/proj/net.h"), SwitchCommand::Switch)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SwitchOutcome::Nothing {
                reason: NothingReason::TargetMissing
            }
        );
        assert_eq!(switcher.workbench().picks.lock().unwrap().len(), 1);
        assert!(switcher.workbench().opened.lock().unwrap().is_empty());
        // net.c matches no rule, yet nothing was remembered for it
        assert!(switcher.memory().is_empty());
    }

    #[tokio::test]
    async fn test_rule_matched_target_is_not_remembered() {
        let workbench = FakeWorkbench::with_files(&["/proj/foo.ts", "/proj/foo.test.ts"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        switcher
            .run(&ts_settings(), Path::new("/proj/foo.ts"), SwitchCommand::Next)
            .await
            .unwrap();

        // `(.*)\.ts$` also matches foo.test.ts
        assert!(switcher.memory().is_empty());
    }

    #[tokio::test]
    async fn test_memory_enables_switching_back() {
        let settings = settings(&[(r"(.*)\.h$", &["$1.h", "$1.c"])]);
        let workbench = FakeWorkbench::with_files(&["/proj/net.h", "/proj/net.c"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&settings, Path::new("/proj/net.h"), SwitchCommand::Switch)
            .await
            .unwrap();
        assert_eq!(outcome, opened("/proj/net.c"));
        assert_eq!(
            switcher.memory().lookup(Path::new("/proj/net.c")),
            Some([PathBuf::from("/proj/net.h"), PathBuf::from("/proj/net.c")].as_slice())
        );

        let outcome = switcher
            .run(&settings, Path::new("/proj/net.c"), SwitchCommand::Switch)
            .await
            .unwrap();
        assert_eq!(outcome, opened("/proj/net.h"));
    }

    #[tokio::test]
    async fn test_rule_takes_precedence_over_memory() {
        let settings = settings(&[(r"(.*)\.h$", &["$1.c"]), (r"(.*)\.c$", &["$1.txt"])]);
        let workbench =
            FakeWorkbench::with_files(&["/proj/net.h", "/proj/net.c", "/proj/net.txt"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        // net.c is matched by the second rule, so nothing is remembered and
        // the way back from net.c is that rule
        switcher
            .run(&settings, Path::new("/proj/net.h"), SwitchCommand::Switch)
            .await
            .unwrap();
        assert!(switcher.memory().is_empty());

        let outcome = switcher
            .run(&settings, Path::new("/proj/net.c"), SwitchCommand::Switch)
            .await
            .unwrap();
        assert_eq!(outcome, opened("/proj/net.txt"));
    }

    #[tokio::test]
    async fn test_no_candidates_falls_back_to_quick_open() {
        let workbench = FakeWorkbench::with_files(&["/proj/readme.md"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&ts_settings(), Path::new("/proj/readme.md"), SwitchCommand::Switch)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SwitchOutcome::QuickOpen {
                keyword: "readme.md".to_string(),
                opened: None
            }
        );
        assert_eq!(
            *switcher.workbench().quick_opens.lock().unwrap(),
            vec!["readme.md".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fallback_disabled() {
        let mut settings = ts_settings();
        settings.fallback_to_quick_open = false;
        let workbench = FakeWorkbench::with_files(&["/proj/foo.ts"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&settings, Path::new("/proj/foo.ts"), SwitchCommand::Switch)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SwitchOutcome::Nothing {
                reason: NothingReason::NoCandidates
            }
        );
        assert!(switcher.workbench().quick_opens.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_compare_never_falls_back() {
        let workbench = FakeWorkbench::with_files(&["/proj/readme.md"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&ts_settings(), Path::new("/proj/readme.md"), SwitchCommand::CompareAsLeft)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SwitchOutcome::Nothing {
                reason: NothingReason::NoCandidates
            }
        );
    }

    #[tokio::test]
    async fn test_compare_directions() {
        let workbench = FakeWorkbench::with_files(&["/proj/foo.ts", "/proj/foo.test.ts"]);
        let mut switcher = Switcher::new(workbench, "/proj");
        let settings = ts_settings();

        let outcome = switcher
            .run(&settings, Path::new("/proj/foo.ts"), SwitchCommand::CompareAsLeft)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            SwitchOutcome::Compared {
                left: PathBuf::from("/proj/foo.ts"),
                right: PathBuf::from("/proj/foo.test.ts"),
                title: "foo.ts ↔ foo.test.ts".to_string(),
            }
        );

        switcher
            .run(&settings, Path::new("/proj/foo.ts"), SwitchCommand::CompareAsRight)
            .await
            .unwrap();
        let diffs = switcher.workbench().diffs.lock().unwrap();
        assert_eq!(diffs[1].0, PathBuf::from("/proj/foo.test.ts"));
        assert_eq!(diffs[1].1, PathBuf::from("/proj/foo.ts"));
        assert_eq!(diffs[1].2, "foo.test.ts ↔ foo.ts");
    }

    #[tokio::test]
    async fn test_index_out_of_range_is_silent() {
        let workbench = FakeWorkbench::with_files(&["/proj/foo.ts", "/proj/foo.test.ts"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&ts_settings(), Path::new("/proj/foo.ts"), SwitchCommand::AtIndex(9))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SwitchOutcome::Nothing {
                reason: NothingReason::NoSelection
            }
        );
    }

    #[tokio::test]
    async fn test_index_addresses_template_positions() {
        let workbench =
            FakeWorkbench::with_files(&["/proj/foo.ts", "/proj/foo.test.ts", "/proj/foo.spec.ts"]);
        let mut switcher = Switcher::new(workbench, "/proj");
        let settings = ts_settings();

        // Position 1 is the current file itself
        let outcome = switcher
            .run(&settings, Path::new("/proj/foo.ts"), SwitchCommand::AtIndex(1))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            SwitchOutcome::Nothing {
                reason: NothingReason::NoSelection
            }
        );

        let outcome = switcher
            .run(&settings, Path::new("/proj/foo.ts"), SwitchCommand::AtIndex(3))
            .await
            .unwrap();
        assert_eq!(outcome, opened("/proj/foo.spec.ts"));
    }

    #[tokio::test]
    async fn test_relative_current_path_is_resolved() {
        let workbench = FakeWorkbench::with_files(&["/proj/src/foo.ts", "/proj/src/foo.test.ts"]);
        let mut switcher = Switcher::new(workbench, "/proj");

        let outcome = switcher
            .run(&ts_settings(), Path::new("src/foo.ts"), SwitchCommand::Next)
            .await
            .unwrap();

        assert_eq!(outcome, opened("/proj/src/foo.test.ts"));
    }

    #[tokio::test]
    async fn test_empty_path_is_no_active_file() {
        let mut switcher = Switcher::new(FakeWorkbench::default(), "/proj");

        let outcome = switcher
            .run(&ts_settings(), Path::new(""), SwitchCommand::Switch)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SwitchOutcome::Nothing {
                reason: NothingReason::NoActiveFile
            }
        );
    }

    #[test]
    fn test_candidates_lists_available() {
        let workbench =
            FakeWorkbench::with_files(&["/proj/foo.ts", "/proj/foo.test.ts", "/proj/foo.spec.ts"]);
        let switcher = Switcher::new(workbench, "/proj");

        assert_eq!(
            switcher.candidates(&ts_settings(), Path::new("/proj/foo.ts")),
            vec![
                PathBuf::from("/proj/foo.test.ts"),
                PathBuf::from("/proj/foo.spec.ts")
            ]
        );
    }
}
