//! Window registry and the manager transitions that mutate it.
//!
//! Windows are keyed by [`AppId`], so at most one window per application kind exists. Every open
//! or focus draws the next value from a single z-index counter owned by the registry; values are
//! never reused, which keeps the stacking order total. If the counter would pass `u32::MAX`, the
//! live windows are renumbered from `Z_INDEX_BASE + 1` in stacking order before the next draw.

use crate::model::{AppId, WindowRecord, Z_INDEX_BASE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    windows: Vec<WindowRecord>,
    top_z_index: u32,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::with_z_base(Z_INDEX_BASE)
    }
}

impl WindowRegistry {
    /// Empty registry whose first assignment is `base + 1`.
    pub fn with_z_base(base: u32) -> Self {
        Self {
            windows: Vec::new(),
            top_z_index: base,
        }
    }

    /// Opens `app_id`, or restores and raises its existing window.
    ///
    /// Returns the z-index assigned to the window. The counter advances by exactly one in both
    /// branches.
    pub fn open(&mut self, app_id: AppId) -> u32 {
        let z_index = self.next_z_index();
        match self.find_mut(app_id) {
            Some(window) => {
                window.is_open = true;
                window.is_minimized = false;
                window.z_index = z_index;
            }
            None => self.windows.push(WindowRecord {
                id: app_id,
                title: app_id.title().to_string(),
                is_open: true,
                is_minimized: false,
                z_index,
            }),
        }
        z_index
    }

    /// Removes the window for `app_id`. Returns whether a window was removed.
    pub fn close(&mut self, app_id: AppId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != app_id);
        self.windows.len() != before
    }

    /// Hides the window for `app_id` without touching its z-index.
    pub fn minimize(&mut self, app_id: AppId) -> bool {
        match self.find_mut(app_id) {
            Some(window) => {
                window.is_minimized = true;
                true
            }
            None => false,
        }
    }

    /// Raises the window for `app_id` to the top of the stack.
    ///
    /// Minimized windows stay minimized; restoring goes through [`Self::open`]. Absent windows
    /// leave the counter untouched.
    pub fn focus(&mut self, app_id: AppId) -> Option<u32> {
        if self.get(app_id).is_none() {
            return None;
        }
        let z_index = self.next_z_index();
        let window = self.find_mut(app_id)?;
        window.z_index = z_index;
        Some(z_index)
    }

    /// The open, non-minimized window with the greatest z-index.
    ///
    /// Derived from the current records on every call.
    pub fn active_window(&self) -> Option<AppId> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    pub fn get(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == app_id)
    }

    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn visible(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.is_visible())
    }

    /// Most recently assigned z-index (the base value when nothing has been assigned yet).
    pub fn top_z_index(&self) -> u32 {
        self.top_z_index
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn next_z_index(&mut self) -> u32 {
        let next = match self.top_z_index.checked_add(1) {
            Some(next) => next,
            None => self.compact_z_indices() + 1,
        };
        self.top_z_index = next;
        next
    }

    /// Renumbers windows from `Z_INDEX_BASE + 1` keeping their relative order. Returns the new top.
    fn compact_z_indices(&mut self) -> u32 {
        let mut stack: Vec<&mut WindowRecord> = self.windows.iter_mut().collect();
        stack.sort_by_key(|w| w.z_index);
        let mut top = Z_INDEX_BASE;
        for window in stack {
            top += 1;
            window.z_index = top;
        }
        top
    }

    fn find_mut(&mut self, app_id: AppId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| w.id == app_id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const Z0: u32 = Z_INDEX_BASE;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Open(AppId),
        Close(AppId),
        Minimize(AppId),
        Focus(AppId),
    }

    fn apply(registry: &mut WindowRegistry, op: Op) {
        match op {
            Op::Open(id) => {
                registry.open(id);
            }
            Op::Close(id) => {
                registry.close(id);
            }
            Op::Minimize(id) => {
                registry.minimize(id);
            }
            Op::Focus(id) => {
                registry.focus(id);
            }
        }
    }

    fn all_ops() -> Vec<Op> {
        AppId::ALL
            .iter()
            .flat_map(|&id| [Op::Open(id), Op::Close(id), Op::Minimize(id), Op::Focus(id)])
            .collect()
    }

    fn expected_active(registry: &WindowRegistry) -> Option<AppId> {
        let mut best: Option<&WindowRecord> = None;
        for window in registry.windows() {
            if window.is_minimized || !window.is_open {
                continue;
            }
            if best.map_or(true, |b| window.z_index > b.z_index) {
                best = Some(window);
            }
        }
        best.map(|w| w.id)
    }

    fn assert_invariants(registry: &WindowRegistry, last: Op) {
        for (idx, window) in registry.windows().iter().enumerate() {
            assert!(
                registry.windows()[idx + 1..].iter().all(|w| w.id != window.id),
                "duplicate window for {}",
                window.id
            );
            assert!(
                registry.windows()[idx + 1..]
                    .iter()
                    .all(|w| w.z_index != window.z_index),
                "z-index tie at {}",
                window.z_index
            );
            assert!(window.z_index <= registry.top_z_index());
        }

        let raised = match last {
            Op::Open(id) => Some(id),
            Op::Focus(id) => registry.get(id).map(|w| w.id),
            _ => None,
        };
        if let Some(id) = raised {
            let raised_z = registry.get(id).expect("raised window").z_index;
            assert!(registry
                .windows()
                .iter()
                .filter(|w| w.id != id)
                .all(|w| w.z_index < raised_z));
        }

        assert_eq!(registry.active_window(), expected_active(registry));
    }

    #[test]
    fn invariants_hold_for_every_three_step_sequence() {
        let ops = all_ops();
        for &a in &ops {
            for &b in &ops {
                for &c in &ops {
                    let mut registry = WindowRegistry::default();
                    for op in [a, b, c] {
                        apply(&mut registry, op);
                        assert_invariants(&registry, op);
                    }
                }
            }
        }
    }

    #[test]
    fn exhausted_counter_renumbers_without_ties() {
        let mut registry = WindowRegistry::with_z_base(u32::MAX - 2);
        registry.open(AppId::Terminal);
        registry.open(AppId::Files);
        assert_eq!(registry.top_z_index(), u32::MAX);

        let z_index = registry.open(AppId::Settings);

        assert_eq!(registry.get(AppId::Terminal).expect("terminal").z_index, Z0 + 1);
        assert_eq!(registry.get(AppId::Files).expect("files").z_index, Z0 + 2);
        assert_eq!(z_index, Z0 + 3);
        assert_eq!(registry.active_window(), Some(AppId::Settings));

        assert_eq!(registry.focus(AppId::Terminal), Some(Z0 + 4));
        assert_eq!(registry.active_window(), Some(AppId::Terminal));
    }

    #[test]
    fn invariants_hold_across_counter_exhaustion() {
        let ops = all_ops();
        for &a in &ops {
            for &b in &ops {
                for &c in &ops {
                    let mut registry = WindowRegistry::with_z_base(u32::MAX - 1);
                    for op in [a, b, c] {
                        apply(&mut registry, op);
                        assert_invariants(&registry, op);
                    }
                }
            }
        }
    }

    #[test]
    fn open_assigns_next_z_index_and_descriptor_title() {
        let mut registry = WindowRegistry::default();
        assert_eq!(registry.open(AppId::ImageGen), Z0 + 1);

        let window = registry.get(AppId::ImageGen).expect("window");
        assert_eq!(window.title, "Aura Gen");
        assert!(window.is_open);
        assert!(!window.is_minimized);
        assert_eq!(window.z_index, Z0 + 1);
    }

    #[test]
    fn reopening_visible_window_only_changes_z_index() {
        let mut registry = WindowRegistry::default();
        registry.open(AppId::Terminal);
        registry.open(AppId::Files);
        let before = registry.get(AppId::Terminal).cloned().expect("terminal");

        registry.open(AppId::Terminal);

        let after = registry.get(AppId::Terminal).cloned().expect("terminal");
        assert_eq!(registry.len(), 2);
        assert_eq!(
            after,
            WindowRecord {
                z_index: Z0 + 3,
                ..before
            }
        );
    }

    #[test]
    fn reopening_minimized_window_restores_and_raises_it() {
        let mut registry = WindowRegistry::default();
        registry.open(AppId::Settings);
        registry.open(AppId::Terminal);
        registry.minimize(AppId::Settings);
        assert_eq!(registry.active_window(), Some(AppId::Terminal));

        let z_index = registry.open(AppId::Settings);

        let settings = registry.get(AppId::Settings).expect("settings");
        assert!(!settings.is_minimized);
        assert_eq!(settings.z_index, z_index);
        assert_eq!(registry.active_window(), Some(AppId::Settings));
    }

    #[test]
    fn minimize_keeps_z_index_and_focus_does_not_restore() {
        let mut registry = WindowRegistry::default();
        registry.open(AppId::Files);
        assert!(registry.minimize(AppId::Files));
        assert_eq!(registry.get(AppId::Files).expect("files").z_index, Z0 + 1);

        assert_eq!(registry.focus(AppId::Files), Some(Z0 + 2));
        let files = registry.get(AppId::Files).expect("files");
        assert!(files.is_minimized);
        assert_eq!(registry.active_window(), None);
        assert_eq!(registry.visible().count(), 0);
    }

    #[test]
    fn operations_on_absent_windows_are_noops() {
        let mut registry = WindowRegistry::default();
        registry.open(AppId::Terminal);
        let before = registry.clone();

        assert!(!registry.close(AppId::Files));
        assert!(!registry.minimize(AppId::Files));
        assert_eq!(registry.focus(AppId::Files), None);
        assert_eq!(registry, before);
    }

    #[test]
    fn closing_twice_matches_closing_once() {
        let mut once = WindowRegistry::default();
        once.open(AppId::Terminal);
        once.open(AppId::Files);
        let mut twice = once.clone();

        assert!(once.close(AppId::Terminal));
        assert!(twice.close(AppId::Terminal));
        assert!(!twice.close(AppId::Terminal));
        assert_eq!(once, twice);
    }

    #[test]
    fn active_window_picks_highest_visible_z_index() {
        let mut registry = WindowRegistry::default();
        assert_eq!(registry.active_window(), None);

        registry.open(AppId::Terminal);
        assert_eq!(registry.active_window(), Some(AppId::Terminal));

        registry.open(AppId::Files);
        registry.open(AppId::Settings);
        registry.open(AppId::ImageGen);
        registry.focus(AppId::Files);
        assert_eq!(registry.active_window(), Some(AppId::Files));

        registry.minimize(AppId::Files);
        assert_eq!(registry.active_window(), Some(AppId::ImageGen));

        registry.minimize(AppId::ImageGen);
        registry.minimize(AppId::Settings);
        assert_eq!(registry.active_window(), Some(AppId::Terminal));

        registry.minimize(AppId::Terminal);
        assert_eq!(registry.active_window(), None);
    }

    #[test]
    fn terminal_files_scenario() {
        let mut registry = WindowRegistry::default();

        registry.open(AppId::Terminal);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.active_window(), Some(AppId::Terminal));
        assert_eq!(registry.get(AppId::Terminal).expect("terminal").z_index, Z0 + 1);

        registry.open(AppId::Files);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.active_window(), Some(AppId::Files));
        assert_eq!(registry.get(AppId::Files).expect("files").z_index, Z0 + 2);

        registry.minimize(AppId::Files);
        assert_eq!(registry.active_window(), Some(AppId::Terminal));

        registry.focus(AppId::Terminal);
        assert_eq!(registry.get(AppId::Terminal).expect("terminal").z_index, Z0 + 3);
        assert_eq!(registry.active_window(), Some(AppId::Terminal));

        registry.close(AppId::Terminal);
        assert_eq!(registry.len(), 1);
        let files = registry.get(AppId::Files).expect("files");
        assert!(files.is_minimized);
        assert_eq!(registry.active_window(), None);
    }
}
