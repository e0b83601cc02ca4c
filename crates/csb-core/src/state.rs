use std::collections::BTreeMap;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::catalog::ThemeKey;
use crate::config::Config;
use crate::fader;
use crate::fader::FaderDrag;
use crate::fader::FaderGeometry;
use crate::wheel::WheelGeometry;

/// Selection the soundboard starts with before anything is persisted.
pub const DEFAULT_SOUNDBOARD_SELECTION: [ThemeKey; 5] = [
    ThemeKey::Maximizer,
    ThemeKey::Connectedness,
    ThemeKey::Belief,
    ThemeKey::Adaptability,
    ThemeKey::Empathy,
];

pub const WHEEL_PLACEHOLDER: &str = "Select your 10 themes to populate your wheel.";
pub const NO_DESCRIPTION: &str = "No description found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppTab {
    #[serde(rename = "soundboard")]
    Soundboard,
    #[serde(rename = "dominant")]
    Dominant,
    #[serde(rename = "comm")]
    Communication,
    #[serde(rename = "bb")]
    BalconyBasement,
}

impl AppTab {
    pub const ALL: [AppTab; 4] = [
        Self::Soundboard,
        Self::Dominant,
        Self::Communication,
        Self::BalconyBasement,
    ];

    pub fn next(self) -> Self {
        match self {
            Self::Soundboard => Self::Dominant,
            Self::Dominant => Self::Communication,
            Self::Communication => Self::BalconyBasement,
            Self::BalconyBasement => Self::Soundboard,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Soundboard => Self::BalconyBasement,
            Self::Dominant => Self::Soundboard,
            Self::Communication => Self::Dominant,
            Self::BalconyBasement => Self::Communication,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Soundboard => "Soundboard",
            Self::Dominant => "Dominant themes",
            Self::Communication => "Strengths & Communication",
            Self::BalconyBasement => "Balconies & Basements",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Theme picker for the soundboard; `selected` indexes the filtered list.
    Picker { query: String, selected: usize },
    Invest,
    ThemeDetail(ThemeKey),
    Explore {
        key: ThemeKey,
        prompts: Vec<&'static str>,
    },
    Help,
}

#[derive(Debug, Clone)]
pub struct Routing {
    pub tab: AppTab,
}

#[derive(Debug, Clone)]
pub struct Interaction {
    pub overlay: Overlay,
    /// Soundboard channel with keyboard focus.
    pub focus_channel: usize,
    /// Wheel slot with keyboard focus.
    pub focus_slot: usize,
}

// ---------------------------------------------------------------------------
// Ranked selection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPolicy {
    /// Fixed slots, holes allowed, position is rank.
    Ranked,
    /// Insertion order; removal closes the gap.
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTarget {
    Slot(usize),
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    Unchanged,
    Placed {
        slot: usize,
        displaced: Option<ThemeKey>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection was full.
    Rejected,
}

/// Ordered set of at most `capacity` distinct theme keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedSelection {
    policy: SlotPolicy,
    capacity: usize,
    // Ranked: always `capacity` long. Compact: only `Some`, at most `capacity`.
    slots: Vec<Option<ThemeKey>>,
}

impl RankedSelection {
    pub fn ranked(capacity: usize) -> Self {
        Self {
            policy: SlotPolicy::Ranked,
            capacity,
            slots: vec![None; capacity],
        }
    }

    pub fn compact(capacity: usize) -> Self {
        Self {
            policy: SlotPolicy::Compact,
            capacity,
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Ranked selection from persisted slots. Later duplicates become holes,
    /// missing slots are padded and extra ones dropped.
    pub fn ranked_from_slots(capacity: usize, slots: &[Option<ThemeKey>]) -> Self {
        let mut selection = Self::ranked(capacity);
        for (idx, key) in slots.iter().take(capacity).enumerate() {
            if let Some(key) = key {
                selection.assign(SlotTarget::Slot(idx), *key);
            }
        }
        selection
    }

    /// Compact selection from a key list, deduplicated and truncated.
    pub fn compact_from_keys(capacity: usize, keys: &[ThemeKey]) -> Self {
        let mut selection = Self::compact(capacity);
        selection.replace_all(keys);
        selection
    }

    pub fn policy(&self) -> SlotPolicy {
        self.policy
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn slots(&self) -> &[Option<ThemeKey>] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<ThemeKey> {
        self.slots.get(index).copied().flatten()
    }

    /// Occupied keys in slot order.
    pub fn keys(&self) -> Vec<ThemeKey> {
        self.slots.iter().flatten().copied().collect()
    }

    pub fn contains(&self, key: ThemeKey) -> bool {
        self.position(key).is_some()
    }

    pub fn position(&self, key: ThemeKey) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(key))
    }

    pub fn count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.count() == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn assign(&mut self, target: SlotTarget, key: ThemeKey) -> AssignOutcome {
        if self.contains(key) {
            return AssignOutcome::Unchanged;
        }
        let slot = match (self.policy, target) {
            (SlotPolicy::Ranked, SlotTarget::Slot(idx)) if idx < self.capacity => idx,
            (SlotPolicy::Ranked, SlotTarget::Next) => {
                match self.slots.iter().position(Option::is_none) {
                    Some(idx) => idx,
                    None => return AssignOutcome::Unchanged,
                }
            }
            (SlotPolicy::Compact, SlotTarget::Slot(idx)) if idx < self.slots.len() => idx,
            (SlotPolicy::Compact, SlotTarget::Slot(idx))
                if idx == self.slots.len() && idx < self.capacity =>
            {
                self.slots.push(None);
                idx
            }
            (SlotPolicy::Compact, SlotTarget::Next) if self.slots.len() < self.capacity => {
                self.slots.push(None);
                self.slots.len() - 1
            }
            _ => return AssignOutcome::Unchanged,
        };
        let displaced = self.slots[slot].replace(key);
        AssignOutcome::Placed { slot, displaced }
    }

    /// Removes `key` wherever it sits, returning the slot it occupied.
    pub fn remove(&mut self, key: ThemeKey) -> Option<usize> {
        let idx = self.position(key)?;
        match self.policy {
            SlotPolicy::Ranked => self.slots[idx] = None,
            SlotPolicy::Compact => {
                self.slots.remove(idx);
            }
        }
        Some(idx)
    }

    /// Empties one slot, returning the key that was there.
    pub fn clear_slot(&mut self, index: usize) -> Option<ThemeKey> {
        let key = self.slot(index)?;
        self.remove(key);
        Some(key)
    }

    pub fn toggle(&mut self, key: ThemeKey) -> ToggleOutcome {
        if self.remove(key).is_some() {
            return ToggleOutcome::Removed;
        }
        match self.assign(SlotTarget::Next, key) {
            AssignOutcome::Placed { .. } => ToggleOutcome::Added,
            AssignOutcome::Unchanged => ToggleOutcome::Rejected,
        }
    }

    pub fn clear_all(&mut self) {
        match self.policy {
            SlotPolicy::Ranked => self.slots.iter_mut().for_each(|slot| *slot = None),
            SlotPolicy::Compact => self.slots.clear(),
        }
    }

    /// Replaces the contents with `keys`, keeping first occurrences and
    /// dropping whatever does not fit.
    pub fn replace_all(&mut self, keys: &[ThemeKey]) {
        self.clear_all();
        for key in keys {
            self.assign(SlotTarget::Next, *key);
        }
    }
}

// ---------------------------------------------------------------------------
// Levels

/// Per-theme fader levels. Entries outlive deselection so a re-selected
/// theme gets its previous level back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelMap(BTreeMap<ThemeKey, f64>);

impl LevelMap {
    pub fn get(&self, key: ThemeKey) -> f64 {
        self.0.get(&key).copied().unwrap_or(fader::DEFAULT_LEVEL)
    }

    pub fn raw(&self, key: ThemeKey) -> Option<f64> {
        self.0.get(&key).copied()
    }

    pub fn ensure(&mut self, key: ThemeKey) -> f64 {
        *self.0.entry(key).or_insert(fader::DEFAULT_LEVEL)
    }

    pub fn ensure_all(&mut self, keys: &[ThemeKey]) {
        for key in keys {
            self.ensure(*key);
        }
    }

    /// Stores the clamped value and returns it.
    pub fn set(&mut self, key: ThemeKey, value: f64) -> f64 {
        let value = fader::clamp_level(value);
        self.0.insert(key, value);
        value
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeKey, f64)> + '_ {
        self.0.iter().map(|(key, value)| (*key, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SoundboardState {
    pub selection: RankedSelection,
    pub levels: LevelMap,
    pub drag: Option<FaderDrag>,
}

impl SoundboardState {
    pub fn new(capacity: usize) -> Self {
        let selection = RankedSelection::compact_from_keys(capacity, &DEFAULT_SOUNDBOARD_SELECTION);
        let mut levels = LevelMap::default();
        levels.ensure_all(&selection.keys());
        Self {
            selection,
            levels,
            drag: None,
        }
    }

    pub fn level(&self, key: ThemeKey) -> f64 {
        self.levels.get(key)
    }
}

// ---------------------------------------------------------------------------
// Pairwise exploration

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorationMode {
    #[default]
    Off,
    Blend,
    Reflect,
}

impl ExplorationMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Blend => "Blend",
            Self::Reflect => "Reflect",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::Blend,
            Self::Blend => Self::Reflect,
            Self::Reflect => Self::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorationPhase {
    Off,
    Picking,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Added,
    Removed,
    /// Two keys are already picked.
    Blocked,
    /// Mode is off or the key is not on the wheel.
    Ineligible,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairwise {
    mode: ExplorationMode,
    picks: Vec<ThemeKey>,
}

impl Pairwise {
    pub const MAX_PICKS: usize = 2;

    pub fn mode(&self) -> ExplorationMode {
        self.mode
    }

    pub fn picks(&self) -> &[ThemeKey] {
        &self.picks
    }

    pub fn phase(&self) -> ExplorationPhase {
        match self.mode {
            ExplorationMode::Off => ExplorationPhase::Off,
            _ if self.picks.len() == Self::MAX_PICKS => ExplorationPhase::Ready,
            _ => ExplorationPhase::Picking,
        }
    }

    /// The picked pair in pick order, once two are chosen.
    pub fn pair(&self) -> Option<(ThemeKey, ThemeKey)> {
        match (self.phase(), self.picks.as_slice()) {
            (ExplorationPhase::Ready, [a, b]) => Some((*a, *b)),
            _ => None,
        }
    }

    /// Switches mode. Any non-off mode needs a full wheel; every accepted
    /// switch drops the current picks.
    pub fn set_mode(&mut self, mode: ExplorationMode, wheel_full: bool) -> bool {
        if mode != ExplorationMode::Off && !wheel_full {
            return false;
        }
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.picks.clear();
        true
    }

    pub fn toggle_pick(&mut self, key: ThemeKey, eligible: bool) -> PickOutcome {
        if self.mode == ExplorationMode::Off || !eligible {
            return PickOutcome::Ineligible;
        }
        if let Some(idx) = self.picks.iter().position(|picked| *picked == key) {
            self.picks.remove(idx);
            return PickOutcome::Removed;
        }
        if self.picks.len() >= Self::MAX_PICKS {
            return PickOutcome::Blocked;
        }
        self.picks.push(key);
        PickOutcome::Added
    }

    pub fn reset_picks(&mut self) {
        self.picks.clear();
    }

    /// Drops `key` from the picks after it left the wheel.
    pub fn forget(&mut self, key: ThemeKey) -> bool {
        let before = self.picks.len();
        self.picks.retain(|picked| *picked != key);
        self.picks.len() != before
    }

    pub fn turn_off(&mut self) {
        self.mode = ExplorationMode::Off;
        self.picks.clear();
    }
}

// ---------------------------------------------------------------------------
// Notes

/// Order-independent identifier of two themes: sorted keys joined with `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairId(String);

impl PairId {
    pub fn new(a: ThemeKey, b: ThemeKey) -> Self {
        let (first, second) = if a.as_str() <= b.as_str() {
            (a, b)
        } else {
            (b, a)
        };
        Self(format!("{}+{}", first.as_str(), second.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn keys(&self) -> Option<(ThemeKey, ThemeKey)> {
        let (a, b) = self.0.split_once('+')?;
        Some((ThemeKey::from_key(a)?, ThemeKey::from_key(b)?))
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const REFLECTION_QUESTION_COUNT: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairNotes {
    pub answers: [String; REFLECTION_QUESTION_COUNT],
    pub ts_ms: i64,
}

impl PairNotes {
    pub fn is_blank(&self) -> bool {
        self.answers.iter().all(|answer| answer.trim().is_empty())
    }

    pub fn updated_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.ts_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesMap(BTreeMap<PairId, PairNotes>);

impl NotesMap {
    pub fn get(&self, pair: &PairId) -> Option<&PairNotes> {
        self.0.get(pair)
    }

    pub fn answer(&self, pair: &PairId, question: usize) -> &str {
        self.0
            .get(pair)
            .and_then(|notes| notes.answers.get(question))
            .map_or("", String::as_str)
    }

    /// Stores one answer. Out-of-range questions are ignored.
    pub fn set_answer(&mut self, pair: PairId, question: usize, text: String, ts_ms: i64) -> bool {
        if question >= REFLECTION_QUESTION_COUNT {
            return false;
        }
        let notes = self.0.entry(pair).or_default();
        notes.answers[question] = text;
        notes.ts_ms = ts_ms;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairId, &PairNotes)> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct WheelState {
    pub selection: RankedSelection,
    pub show_domain_colours: bool,
    pub pairwise: Pairwise,
    pub notes: NotesMap,
}

impl WheelState {
    pub fn new(slots: usize) -> Self {
        Self {
            selection: RankedSelection::ranked(slots),
            show_domain_colours: true,
            pairwise: Pairwise::default(),
            notes: NotesMap::default(),
        }
    }

    /// Pair id of the current exploration, once two themes are picked.
    pub fn active_pair(&self) -> Option<PairId> {
        self.pairwise.pair().map(|(a, b)| PairId::new(a, b))
    }
}

// ---------------------------------------------------------------------------
// Favourites

/// Starred coaching questions: theme key → question id → starred.
/// Kept as strings so unknown entries survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favourites(BTreeMap<String, BTreeMap<String, bool>>);

impl Favourites {
    pub fn question_id(key: ThemeKey, question: &str) -> String {
        format!("{}::{question}", key.as_str())
    }

    pub fn is_starred(&self, key: ThemeKey, question: &str) -> bool {
        self.0
            .get(key.as_str())
            .and_then(|theme| theme.get(&Self::question_id(key, question)))
            .copied()
            .unwrap_or(false)
    }

    /// Flips the star and returns the new value.
    pub fn toggle(&mut self, key: ThemeKey, question: &str) -> bool {
        let entry = self
            .0
            .entry(key.as_str().to_string())
            .or_default()
            .entry(Self::question_id(key, question))
            .or_insert(false);
        *entry = !*entry;
        *entry
    }

    pub fn starred(&self, key: ThemeKey) -> Vec<&str> {
        let prefix = format!("{}::", key.as_str());
        self.0
            .get(key.as_str())
            .map(|theme| {
                theme
                    .iter()
                    .filter(|(_, starred)| **starred)
                    .filter_map(|(id, _)| id.strip_prefix(prefix.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Activity log

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSource {
    App,
    Store,
    Import,
    Export,
}

impl LogSource {
    pub fn label(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Store => "store",
            Self::Import => "import",
            Self::Export => "export",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub seq: u64,
    pub level: LogLevel,
    pub ts_ms: Option<i64>,
    pub source: LogSource,
    pub message: Arc<str>,
}

impl LogEntry {
    pub fn new(level: LogLevel, source: LogSource, message: impl Into<Arc<str>>) -> Self {
        Self {
            seq: 0,
            level,
            ts_ms: None,
            source,
            message: message.into(),
        }
    }
}

/// Bounded FIFO of activity entries with monotonically increasing sequence numbers.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    cap: usize,
    next_seq: u64,
    buf: VecDeque<LogEntry>,
}

impl LogBuffer {
    pub fn new(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            next_seq: 1,
            buf: VecDeque::with_capacity(cap),
        }
    }

    pub fn append(&mut self, mut entry: LogEntry) {
        entry.seq = self.next_seq;
        self.next_seq += 1;

        if self.buf.len() == self.cap {
            self.buf.pop_front();
        }
        self.buf.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.buf.clear();
        self.next_seq = 1;
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.buf.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.buf.back()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AppState {
    pub routing: Routing,
    pub interaction: Interaction,
    pub soundboard: SoundboardState,
    pub wheel: WheelState,
    pub favourites: Favourites,
    pub activity: LogBuffer,
    pub wheel_geometry: WheelGeometry,
    pub fader_geometry: FaderGeometry,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            routing: Routing {
                tab: AppTab::Soundboard,
            },
            interaction: Interaction {
                overlay: Overlay::None,
                focus_channel: 0,
                focus_slot: 0,
            },
            soundboard: SoundboardState::new(config.soundboard.capacity),
            wheel: WheelState::new(config.wheel.slots),
            favourites: Favourites::default(),
            activity: LogBuffer::new(500),
            wheel_geometry: config.wheel,
            fader_geometry: config.fader,
        }
    }

    pub fn wheel_full(&self) -> bool {
        self.wheel.selection.is_full()
    }

    /// Soundboard key with keyboard focus, if any channel exists.
    pub fn focused_channel_key(&self) -> Option<ThemeKey> {
        self.soundboard
            .selection
            .slot(self.interaction.focus_channel)
    }

    pub fn focused_slot_key(&self) -> Option<ThemeKey> {
        self.wheel.selection.slot(self.interaction.focus_slot)
    }

    pub fn log(&mut self, level: LogLevel, source: LogSource, message: impl Into<Arc<str>>) {
        self.activity.append(LogEntry::new(level, source, message));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ranked_assign_replaces_and_reports_displaced() {
        let mut sel = RankedSelection::ranked(10);
        assert_eq!(
            sel.assign(SlotTarget::Slot(3), ThemeKey::Focus),
            AssignOutcome::Placed {
                slot: 3,
                displaced: None
            }
        );
        assert_eq!(
            sel.assign(SlotTarget::Slot(3), ThemeKey::Woo),
            AssignOutcome::Placed {
                slot: 3,
                displaced: Some(ThemeKey::Focus)
            }
        );
        assert_eq!(sel.slot(3), Some(ThemeKey::Woo));
        assert!(!sel.contains(ThemeKey::Focus));
        assert_eq!(sel.count(), 1);
    }

    #[test]
    fn duplicate_and_out_of_range_assignments_are_no_ops() {
        let mut sel = RankedSelection::ranked(10);
        sel.assign(SlotTarget::Slot(0), ThemeKey::Focus);
        assert_eq!(
            sel.assign(SlotTarget::Slot(5), ThemeKey::Focus),
            AssignOutcome::Unchanged
        );
        assert_eq!(
            sel.assign(SlotTarget::Slot(10), ThemeKey::Woo),
            AssignOutcome::Unchanged
        );
        assert_eq!(sel.keys(), vec![ThemeKey::Focus]);
    }

    #[test]
    fn ranked_removal_leaves_hole_compact_closes_gap() {
        let mut ranked = RankedSelection::ranked(3);
        let mut compact = RankedSelection::compact(3);
        for key in [ThemeKey::Achiever, ThemeKey::Belief, ThemeKey::Context] {
            ranked.assign(SlotTarget::Next, key);
            compact.assign(SlotTarget::Next, key);
        }
        ranked.remove(ThemeKey::Belief);
        compact.remove(ThemeKey::Belief);
        assert_eq!(
            ranked.slots(),
            &[Some(ThemeKey::Achiever), None, Some(ThemeKey::Context)]
        );
        assert_eq!(
            compact.slots(),
            &[Some(ThemeKey::Achiever), Some(ThemeKey::Context)]
        );
        ranked.assign(SlotTarget::Next, ThemeKey::Woo);
        assert_eq!(ranked.slot(1), Some(ThemeKey::Woo));
    }

    #[test]
    fn toggle_respects_capacity() {
        let mut sel = RankedSelection::compact(2);
        assert_eq!(sel.toggle(ThemeKey::Woo), ToggleOutcome::Added);
        assert_eq!(sel.toggle(ThemeKey::Focus), ToggleOutcome::Added);
        assert_eq!(sel.toggle(ThemeKey::Input), ToggleOutcome::Rejected);
        assert_eq!(sel.toggle(ThemeKey::Woo), ToggleOutcome::Removed);
        assert_eq!(sel.keys(), vec![ThemeKey::Focus]);
    }

    #[test]
    fn ranked_from_slots_drops_later_duplicates() {
        let sel = RankedSelection::ranked_from_slots(
            4,
            &[
                Some(ThemeKey::Woo),
                Some(ThemeKey::Woo),
                None,
                Some(ThemeKey::Input),
                Some(ThemeKey::Focus),
            ],
        );
        assert_eq!(
            sel.slots(),
            &[Some(ThemeKey::Woo), None, None, Some(ThemeKey::Input)]
        );
    }

    #[test]
    fn pair_id_is_order_independent() {
        let a = PairId::new(ThemeKey::Woo, ThemeKey::Achiever);
        let b = PairId::new(ThemeKey::Achiever, ThemeKey::Woo);
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "achiever+woo");
        assert_eq!(a.keys(), Some((ThemeKey::Achiever, ThemeKey::Woo)));
    }

    #[test]
    fn pairwise_needs_full_wheel_and_blocks_at_two() {
        let mut pairwise = Pairwise::default();
        assert!(!pairwise.set_mode(ExplorationMode::Blend, false));
        assert_eq!(pairwise.phase(), ExplorationPhase::Off);
        assert!(pairwise.set_mode(ExplorationMode::Blend, true));
        assert_eq!(pairwise.phase(), ExplorationPhase::Picking);

        assert_eq!(pairwise.toggle_pick(ThemeKey::Woo, true), PickOutcome::Added);
        assert_eq!(pairwise.toggle_pick(ThemeKey::Input, false), PickOutcome::Ineligible);
        assert_eq!(pairwise.toggle_pick(ThemeKey::Focus, true), PickOutcome::Added);
        assert_eq!(pairwise.phase(), ExplorationPhase::Ready);
        assert_eq!(pairwise.toggle_pick(ThemeKey::Input, true), PickOutcome::Blocked);
        assert_eq!(pairwise.picks(), &[ThemeKey::Woo, ThemeKey::Focus]);

        assert_eq!(pairwise.toggle_pick(ThemeKey::Woo, true), PickOutcome::Removed);
        assert_eq!(pairwise.phase(), ExplorationPhase::Picking);
    }

    #[test]
    fn switching_modes_clears_picks() {
        let mut pairwise = Pairwise::default();
        pairwise.set_mode(ExplorationMode::Blend, true);
        pairwise.toggle_pick(ThemeKey::Woo, true);
        assert!(pairwise.set_mode(ExplorationMode::Reflect, true));
        assert!(pairwise.picks().is_empty());
        assert!(pairwise.set_mode(ExplorationMode::Off, false));
        assert_eq!(pairwise.phase(), ExplorationPhase::Off);
    }

    #[test]
    fn favourites_toggle_and_list() {
        let mut favs = Favourites::default();
        assert!(favs.toggle(ThemeKey::Woo, "Who lights you up?"));
        assert!(favs.is_starred(ThemeKey::Woo, "Who lights you up?"));
        assert_eq!(favs.starred(ThemeKey::Woo), vec!["Who lights you up?"]);
        assert!(!favs.toggle(ThemeKey::Woo, "Who lights you up?"));
        assert!(favs.starred(ThemeKey::Woo).is_empty());
    }

    #[test]
    fn notes_ignore_out_of_range_questions() {
        let mut notes = NotesMap::default();
        let pair = PairId::new(ThemeKey::Woo, ThemeKey::Focus);
        assert!(!notes.set_answer(pair.clone(), 4, "x".to_string(), 1));
        assert!(notes.is_empty());
        assert!(notes.set_answer(pair.clone(), 2, "ok".to_string(), 7));
        assert_eq!(notes.answer(&pair, 2), "ok");
        assert_eq!(notes.get(&pair).map(|n| n.ts_ms), Some(7));
    }

    #[test]
    fn default_state_has_soundboard_defaults() {
        let state = AppState::default();
        assert_eq!(state.soundboard.selection.keys(), DEFAULT_SOUNDBOARD_SELECTION.to_vec());
        for key in DEFAULT_SOUNDBOARD_SELECTION {
            assert_eq!(state.soundboard.levels.raw(key), Some(50.0));
        }
        assert_eq!(state.wheel.selection.count(), 0);
        assert!(state.wheel.show_domain_colours);
    }
}
