use serde::{Deserialize, Serialize};

use bindex_core::{BindingRecord, ObjectDescriptor, Timing, TriggerAction, TriggerOperation};

/// Connection settings for the hosting platform. An empty instance URL means
/// no org is configured and the app runs against fixture data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub instance_url: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_token_env")]
    pub access_token_env: String,
}

fn default_api_version() -> String {
    bindex_config::DEFAULT_API_VERSION.to_string()
}

fn default_token_env() -> String {
    bindex_config::DEFAULT_TOKEN_ENV.to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            instance_url: String::new(),
            api_version: default_api_version(),
            access_token_env: default_token_env(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum BootState {
    Loading,
    Ready,
    Failed(String),
}

/// The three viewer positions the explorer composes. Each slot pins a timing
/// half and an async flag; only the operation varies with the selected
/// action, so the Before+async combination is unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerSlot {
    Before,
    After,
    AfterAsync,
}

impl ViewerSlot {
    pub const ALL: [ViewerSlot; 3] = [Self::Before, Self::After, Self::AfterAsync];

    pub fn timing(self) -> Timing {
        match self {
            Self::Before => Timing::Before,
            Self::After | Self::AfterAsync => Timing::After,
        }
    }

    pub fn is_async(self) -> bool {
        matches!(self, Self::AfterAsync)
    }

    pub fn phase_for(self, action: TriggerAction) -> TriggerOperation {
        match self.timing() {
            Timing::Before => TriggerOperation::before(action),
            Timing::After => TriggerOperation::after(action),
        }
    }
}

/// Fetch outcome for one viewer. Pending, empty-but-resolved, and failed are
/// three distinct observable states.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerData {
    Pending,
    Ready(Vec<BindingRecord>),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ViewerState {
    pub phase: TriggerOperation,
    pub is_async: bool,
    pub data: ViewerData,
    /// True while a fetch is in flight. Combined with `data`:
    /// `Pending` + loading is the initial load, `Ready` + loading is a
    /// refresh keeping stale rows visible underneath the spinner.
    pub is_loading: bool,
    /// Latest fetch issued for this slot. Results tagged with an older id
    /// were superseded and are discarded before they reach the reducer.
    pub request_id: u64,
}

impl ViewerState {
    fn for_slot(slot: ViewerSlot, action: TriggerAction) -> Self {
        Self {
            phase: slot.phase_for(action),
            is_async: slot.is_async(),
            data: ViewerData::Pending,
            is_loading: false,
            request_id: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Viewers {
    pub before: ViewerState,
    pub after: ViewerState,
    pub after_async: ViewerState,
}

impl Viewers {
    pub fn get(&self, slot: ViewerSlot) -> &ViewerState {
        match slot {
            ViewerSlot::Before => &self.before,
            ViewerSlot::After => &self.after,
            ViewerSlot::AfterAsync => &self.after_async,
        }
    }

    pub fn get_mut(&mut self, slot: ViewerSlot) -> &mut ViewerState {
        match slot {
            ViewerSlot::Before => &mut self.before,
            ViewerSlot::After => &mut self.after,
            ViewerSlot::AfterAsync => &mut self.after_async,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ViewerSlot, &ViewerState)> + '_ {
        ViewerSlot::ALL.iter().map(move |&slot| (slot, self.get(slot)))
    }

    pub fn any_loading(&self) -> bool {
        self.iter().any(|(_, v)| v.is_loading)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub boot: BootState,

    /// Triggerable objects, already in display order.
    pub objects: Vec<ObjectDescriptor>,
    pub selected_object: Option<String>,
    pub selected_action: TriggerAction,

    pub viewers: Viewers,
}

impl Default for AppState {
    fn default() -> Self {
        let action = TriggerAction::default();
        Self {
            boot: BootState::Loading,
            objects: Vec::new(),
            selected_object: None,
            selected_action: action,
            viewers: Viewers {
                before: ViewerState::for_slot(ViewerSlot::Before, action),
                after: ViewerState::for_slot(ViewerSlot::After, action),
                after_async: ViewerState::for_slot(ViewerSlot::AfterAsync, action),
            },
        }
    }
}
