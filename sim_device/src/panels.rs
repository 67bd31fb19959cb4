//! Retained-mode panel, control, log, and plot state.
//!
//! Controls are keyed by (panel, control) and replaced wholesale when a
//! declaration repeats a key. Showing a panel hides the previously shown
//! one and reports both transitions through the event queue.

use crate::events::EventQueue;
use host_types::{EventRecord, GuiEventType, PanelLedColor, PanelLedSize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Rgb {
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub visible: bool,
    pub in_rotation: bool,
    pub background: Rgb,
    pub show_menu: bool,
    pub menu_text: HashMap<i32, String>,
    /// Set only for pick list panels.
    pub pick_list_caption: Option<String>,
    pub pick_list_log: Option<i32>,
}

/// What a control is, with the state that matters per kind.
#[derive(Debug, Clone)]
pub enum ControlKind {
    Led {
        color: PanelLedColor,
        size: PanelLedSize,
    },
    Text {
        text: String,
    },
    Number {
        is_float: bool,
        float_digits: i32,
        is_hex_format: bool,
        is_unsigned: bool,
    },
    Picture {
        picture_id: i32,
    },
    PictureFile {
        file_name: String,
    },
    Plot {
        plot_data_index_bit_field: i32,
        min: i32,
        max: i32,
    },
    Bargraph {
        min: i32,
        max: i32,
    },
    Button {
        text: String,
    },
    LogList {
        log: i32,
    },
}

/// One placed control with its live value and optional clamping.
#[derive(Debug, Clone)]
pub struct Control {
    pub kind: ControlKind,
    pub x: i32,
    pub y: i32,
    pub visible: bool,
    pub value: i32,
    pub value_float: f32,
    pub clamp: Option<(i32, i32)>,
    pub clamp_float: Option<(f32, f32)>,
}

impl Control {
    fn new(kind: ControlKind, x: i32, y: i32, visible: bool) -> Self {
        Self {
            kind,
            x,
            y,
            visible,
            value: 0,
            value_float: 0.0,
            clamp: None,
            clamp_float: None,
        }
    }
}

/// Time axis configuration of a plot control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotXAxis {
    pub scroll_mode: i32,
    pub time_min: u64,
    pub time_max: u64,
}

#[derive(Debug, Clone, Default)]
pub struct PlotSeries {
    pub color: Rgb,
    pub samples: Vec<i32>,
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}

/// All panel-layer state of the device.
#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: HashMap<i32, Panel>,
    controls: HashMap<(i32, i32), Control>,
    axes: HashMap<(i32, i32), PlotXAxis>,
    logs: HashMap<i32, Vec<String>>,
    plot_series: HashMap<i32, PlotSeries>,
    shown: Option<i32>,
    exited: bool,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_panel(
        &mut self,
        index: i32,
        visible: bool,
        in_rotation: bool,
        background: Rgb,
        show_menu: bool,
    ) {
        self.panels.insert(
            index,
            Panel {
                visible,
                in_rotation,
                background,
                show_menu,
                menu_text: HashMap::new(),
                pick_list_caption: None,
                pick_list_log: None,
            },
        );
    }

    pub fn add_panel_pick_list(&mut self, index: i32, caption: &str, log_index: i32) {
        self.panels.insert(
            index,
            Panel {
                visible: false,
                in_rotation: false,
                background: Rgb::default(),
                show_menu: false,
                menu_text: HashMap::new(),
                pick_list_caption: Some(caption.to_string()),
                pick_list_log: Some(log_index),
            },
        );
        self.logs.entry(log_index).or_default();
    }

    pub fn set_panel_menu_text(&mut self, panel: i32, button: i32, message: &str) {
        if let Some(p) = self.panels.get_mut(&panel) {
            p.menu_text.insert(button, message.to_string());
        }
    }

    pub fn add_control(&mut self, panel: i32, control: i32, ctrl: ControlKind, x: i32, y: i32, visible: bool) {
        self.controls
            .insert((panel, control), Control::new(ctrl, x, y, visible));
    }

    /// Adds an LED control; `initial_state` nonzero lights it.
    pub fn add_control_led(
        &mut self,
        panel: i32,
        control: i32,
        x: i32,
        y: i32,
        color: PanelLedColor,
        size: PanelLedSize,
        initial_state: i32,
    ) {
        let mut ctrl = Control::new(ControlKind::Led { color, size }, x, y, true);
        ctrl.value = i32::from(initial_state != 0);
        self.controls.insert((panel, control), ctrl);
    }

    pub fn set_x_axis(&mut self, panel: i32, control: i32, axis: PlotXAxis) {
        self.axes.insert((panel, control), axis);
    }

    pub fn x_axis(&self, panel: i32, control: i32) -> Option<PlotXAxis> {
        self.axes.get(&(panel, control)).copied()
    }

    pub fn add_plot_series(&mut self, plot_data_index: i32, color: Rgb) {
        self.plot_series.insert(
            plot_data_index,
            PlotSeries {
                color,
                samples: Vec::new(),
            },
        );
    }

    /// Pushes a sample into a declared series; unknown series are ignored.
    pub fn push_plot_sample(&mut self, plot_data: i32, new_value: i32) {
        if let Some(series) = self.plot_series.get_mut(&plot_data) {
            series.samples.push(new_value);
        }
    }

    pub fn plot_series(&self, plot_data_index: i32) -> Option<&PlotSeries> {
        self.plot_series.get(&plot_data_index)
    }

    pub fn append_log_line(&mut self, log_index: i32, text: &str) {
        self.logs
            .entry(log_index)
            .or_default()
            .push(text.to_string());
    }

    /// Replaces one existing log item; out-of-range indexes are ignored.
    pub fn set_log_item(&mut self, log_index: i32, list_index: i32, text: &str) {
        if list_index < 0 {
            return;
        }
        if let Some(items) = self.logs.get_mut(&log_index) {
            if let Some(item) = items.get_mut(list_index as usize) {
                *item = text.to_string();
            }
        }
    }

    /// Clears log and plot data. Both arguments are one-based; zero skips.
    pub fn clear_data(&mut self, log_index_plus_one: i32, plot_index_plus_one: i32) {
        if log_index_plus_one > 0 {
            if let Some(items) = self.logs.get_mut(&(log_index_plus_one - 1)) {
                items.clear();
            }
        }
        if plot_index_plus_one > 0 {
            if let Some(series) = self.plot_series.get_mut(&(plot_index_plus_one - 1)) {
                series.samples.clear();
            }
        }
    }

    pub fn log_items(&self, log_index: i32) -> &[String] {
        self.logs.get(&log_index).map_or(&[], |items| items.as_slice())
    }

    pub fn control(&self, panel: i32, control: i32) -> Option<&Control> {
        self.controls.get(&(panel, control))
    }

    pub fn set_clamp(&mut self, panel: i32, control: i32, enable: bool, min: i32, max: i32) {
        if let Some(ctrl) = self.controls.get_mut(&(panel, control)) {
            ctrl.clamp = enable.then_some((min, max));
        }
    }

    pub fn set_clamp_float(&mut self, panel: i32, control: i32, enable: bool, min: f32, max: f32) {
        if let Some(ctrl) = self.controls.get_mut(&(panel, control)) {
            ctrl.clamp_float = enable.then_some((min, max));
        }
    }

    pub fn set_value(&mut self, panel: i32, control: i32, new_value: i32) {
        if let Some(ctrl) = self.controls.get_mut(&(panel, control)) {
            ctrl.value = match ctrl.clamp {
                Some((min, max)) => new_value.clamp(min, max),
                None => new_value,
            };
        }
    }

    pub fn set_value_float(&mut self, panel: i32, control: i32, new_value: f32) {
        if let Some(ctrl) = self.controls.get_mut(&(panel, control)) {
            ctrl.value_float = match ctrl.clamp_float {
                Some((min, max)) => new_value.clamp(min, max),
                None => new_value,
            };
        }
    }

    /// Brings a panel to the front, reporting hide and show transitions.
    pub fn show_panel(&mut self, index: i32, events: &mut EventQueue) {
        if !self.panels.contains_key(&index) {
            return;
        }
        if self.shown == Some(index) {
            return;
        }
        if let Some(previous) = self.shown {
            if let Some(p) = self.panels.get_mut(&previous) {
                p.visible = false;
            }
            events.push(EventRecord::int(GuiEventType::PanelHide, previous));
        }
        if let Some(p) = self.panels.get_mut(&index) {
            p.visible = true;
        }
        self.shown = Some(index);
        events.push(EventRecord::int(GuiEventType::PanelShow, index));
    }

    pub fn shown_panel(&self) -> Option<i32> {
        self.shown
    }

    pub fn panel(&self, index: i32) -> Option<&Panel> {
        self.panels.get(&index)
    }

    /// Leaves the script UI; reported through the event queue.
    pub fn exit_to_main_menu(&mut self, events: &mut EventQueue) {
        self.exited = true;
        if let Some(previous) = self.shown.take() {
            if let Some(p) = self.panels.get_mut(&previous) {
                p.visible = false;
            }
            events.push(EventRecord::int(GuiEventType::PanelHide, previous));
        }
        events.push(EventRecord::empty(GuiEventType::MainMenuShown));
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use host_types::EventNumber;

    fn registry_with_panels() -> PanelRegistry {
        let mut reg = PanelRegistry::new();
        reg.add_panel(0, true, true, Rgb::new(0, 0, 0), false);
        reg.add_panel(1, false, true, Rgb::new(10, 20, 30), true);
        reg
    }

    #[test]
    fn test_show_panel_reports_transitions() {
        let mut reg = registry_with_panels();
        let mut events = EventQueue::new();

        reg.show_panel(0, &mut events);
        assert_eq!(reg.shown_panel(), Some(0));
        let show = events.pop().unwrap();
        assert_eq!(show.event_type(), GuiEventType::PanelShow);
        assert_eq!(show.as_number(), Some(EventNumber::Int(0)));

        reg.show_panel(1, &mut events);
        let hide = events.pop().unwrap();
        assert_eq!(hide.event_type(), GuiEventType::PanelHide);
        assert_eq!(hide.as_number(), Some(EventNumber::Int(0)));
        assert_eq!(events.pop().unwrap().event_type(), GuiEventType::PanelShow);
        assert!(!reg.panel(0).unwrap().visible);
        assert!(reg.panel(1).unwrap().visible);
    }

    #[test]
    fn test_show_panel_is_idempotent_and_checked() {
        let mut reg = registry_with_panels();
        let mut events = EventQueue::new();
        reg.show_panel(0, &mut events);
        events.pop();

        reg.show_panel(0, &mut events);
        assert!(events.is_empty());

        reg.show_panel(42, &mut events);
        assert!(events.is_empty());
        assert_eq!(reg.shown_panel(), Some(0));
    }

    #[test]
    fn test_control_replacement_resets_state() {
        let mut reg = registry_with_panels();
        reg.add_control_led(0, 1, 5, 5, PanelLedColor::Green, PanelLedSize::Size32, 1);
        assert_eq!(reg.control(0, 1).unwrap().value, 1);

        reg.add_control_led(0, 1, 5, 5, PanelLedColor::Red, PanelLedSize::Size64, 0);
        assert_eq!(reg.control(0, 1).unwrap().value, 0);
    }

    #[test]
    fn test_value_clamping() {
        let mut reg = registry_with_panels();
        reg.add_control(0, 2, ControlKind::Bargraph { min: 0, max: 100 }, 0, 0, true);
        reg.set_clamp(0, 2, true, 0, 100);
        reg.set_value(0, 2, 250);
        assert_eq!(reg.control(0, 2).unwrap().value, 100);

        reg.set_clamp(0, 2, false, 0, 100);
        reg.set_value(0, 2, 250);
        assert_eq!(reg.control(0, 2).unwrap().value, 250);
    }

    #[test]
    fn test_float_value_clamping() {
        let mut reg = registry_with_panels();
        reg.add_control(
            0,
            3,
            ControlKind::Number {
                is_float: true,
                float_digits: 2,
                is_hex_format: false,
                is_unsigned: false,
            },
            0,
            0,
            true,
        );
        reg.set_clamp_float(0, 3, true, -1.0, 1.0);
        reg.set_value_float(0, 3, 3.5);
        assert_eq!(reg.control(0, 3).unwrap().value_float, 1.0);
    }

    #[test]
    fn test_logs_and_list_items() {
        let mut reg = PanelRegistry::new();
        reg.append_log_line(0, "first");
        reg.append_log_line(0, "second");
        reg.set_log_item(0, 1, "patched");
        reg.set_log_item(0, 9, "ignored");
        assert_eq!(reg.log_items(0), &["first", "patched"]);

        reg.clear_data(1, 0);
        assert!(reg.log_items(0).is_empty());
    }

    #[test]
    fn test_plot_series() {
        let mut reg = PanelRegistry::new();
        reg.add_plot_series(2, Rgb::new(255, 0, 0));
        reg.push_plot_sample(2, 10);
        reg.push_plot_sample(2, 20);
        reg.push_plot_sample(7, 99);
        assert_eq!(reg.plot_series(2).unwrap().samples, vec![10, 20]);
        assert!(reg.plot_series(7).is_none());

        reg.clear_data(0, 3);
        assert!(reg.plot_series(2).unwrap().samples.is_empty());
    }

    #[test]
    fn test_exit_reports_main_menu() {
        let mut reg = registry_with_panels();
        let mut events = EventQueue::new();
        reg.show_panel(1, &mut events);
        events.pop();

        reg.exit_to_main_menu(&mut events);
        assert!(reg.has_exited());
        assert_eq!(events.pop().unwrap().event_type(), GuiEventType::PanelHide);
        assert_eq!(events.pop().unwrap().event_type(), GuiEventType::MainMenuShown);
    }
}
