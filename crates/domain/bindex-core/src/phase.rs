use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse trigger action offered by the filter. The filter only ever emits
/// values from this fixed set, so downstream derivations are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerAction {
    Create,
    Update,
    Delete,
}

impl TriggerAction {
    /// Fixed display order; the first entry is the default selection.
    pub const ALL: [TriggerAction; 3] = [Self::Create, Self::Update, Self::Delete];

    pub fn value(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Created",
            Self::Update => "Updated",
            Self::Delete => "Deleted",
        }
    }

    /// String-boundary parse; anything outside the fixed set has no phase.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.value() == value)
    }
}

impl Default for TriggerAction {
    fn default() -> Self {
        Self::ALL[0]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timing {
    Before,
    After,
}

impl Timing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "Before",
            Self::After => "After",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerOperationKind {
    Insert,
    Update,
    Delete,
    Undelete,
}

impl TriggerOperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "Insert",
            Self::Update => "Update",
            Self::Delete => "Delete",
            Self::Undelete => "Undelete",
        }
    }

    pub fn for_action(action: TriggerAction) -> Self {
        match action {
            TriggerAction::Create => Self::Insert,
            TriggerAction::Update => Self::Update,
            TriggerAction::Delete => Self::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhaseError {
    #[error("impossible state: Before phase cannot execute asynchronously")]
    BeforeAsync,
    #[error("impossible state: undelete has no Before phase")]
    BeforeUndelete,
    #[error("unknown trigger operation `{0}`")]
    UnknownOperation(String),
}

/// A canonical lifecycle phase: timing half plus operation, serialized as
/// `"{Before|After}_{Insert|Update|Delete|Undelete}"`.
///
/// `Before_Undelete` is unconstructible; a record is never observable
/// "before" an undelete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerOperation {
    timing: Timing,
    kind: TriggerOperationKind,
}

impl TriggerOperation {
    pub fn new(timing: Timing, kind: TriggerOperationKind) -> Result<Self, PhaseError> {
        if timing == Timing::Before && kind == TriggerOperationKind::Undelete {
            return Err(PhaseError::BeforeUndelete);
        }
        Ok(Self { timing, kind })
    }

    /// `create -> Before_Insert`, `update -> Before_Update`,
    /// `delete -> Before_Delete`.
    pub fn before(action: TriggerAction) -> Self {
        Self {
            timing: Timing::Before,
            kind: TriggerOperationKind::for_action(action),
        }
    }

    /// Same operation mapping as [`Self::before`], in the After half.
    pub fn after(action: TriggerAction) -> Self {
        Self {
            timing: Timing::After,
            kind: TriggerOperationKind::for_action(action),
        }
    }

    pub fn timing(self) -> Timing {
        self.timing
    }

    pub fn kind(self) -> TriggerOperationKind {
        self.kind
    }

    /// Viewer title for this phase under the given async flag. Fails fast on
    /// the impossible Before+async combination; callers must not render a
    /// viewer whose title derivation errored.
    pub fn title(self, is_async: bool) -> Result<&'static str, PhaseError> {
        viewer_title(self.timing, is_async)
    }
}

impl fmt::Display for TriggerOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.timing.as_str(), self.kind.as_str())
    }
}

impl FromStr for TriggerOperation {
    type Err = PhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || PhaseError::UnknownOperation(s.to_string());
        let (timing, kind) = s.split_once('_').ok_or_else(unknown)?;
        let timing = match timing {
            "Before" => Timing::Before,
            "After" => Timing::After,
            _ => return Err(unknown()),
        };
        let kind = match kind {
            "Insert" => TriggerOperationKind::Insert,
            "Update" => TriggerOperationKind::Update,
            "Delete" => TriggerOperationKind::Delete,
            "Undelete" => TriggerOperationKind::Undelete,
            _ => return Err(unknown()),
        };
        Self::new(timing, kind)
    }
}

/// Title shown above a binding list.
pub fn viewer_title(timing: Timing, is_async: bool) -> Result<&'static str, PhaseError> {
    match (timing, is_async) {
        (Timing::Before, true) => Err(PhaseError::BeforeAsync),
        (Timing::Before, false) => Ok("Record Before Save"),
        (Timing::After, false) => Ok("Record After Save"),
        (Timing::After, true) => Ok("Run Asynchronously"),
    }
}
