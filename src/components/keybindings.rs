//! Keybinding registry
//!
//! Maps key events to `KeyAction`s and provides the text for the help
//! overlay, so what the keys do and what the help says cannot drift apart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    Home,
    End,
    Select,
    Quit,
    Help,
    Dismiss,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether `event` triggers this binding.
    ///
    /// Character keys ignore SHIFT, since terminals report `G` both with and
    /// without it.
    fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        let mods = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        mods == self.modifiers
    }
}

/// A titled group of bindings for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

/// Keybinding registry for the menu and the help overlay
pub struct KeybindingContext {
    /// Bindings active while the menu has focus
    menu_bindings: Vec<Keybinding>,
    /// Bindings active while the help overlay is open
    help_bindings: Vec<Keybinding>,
    /// Bindings available everywhere
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            menu_bindings: Vec::new(),
            help_bindings: Vec::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        self.menu_bindings = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "↑/k", "Move up"),
            Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "k", "Move up"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "↓/j", "Move down"),
            Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "j", "Move down"),
            Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
            Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
            Keybinding::new(KeyCode::Home, KeyAction::Home, "Home/g", "Go to first"),
            Keybinding::new(KeyCode::Char('g'), KeyAction::Home, "g", "Go to first"),
            Keybinding::new(KeyCode::End, KeyAction::End, "End/G", "Go to last"),
            Keybinding::new(KeyCode::Char('G'), KeyAction::End, "G", "Go to last"),
            Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Run selected action"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Toggle help"),
        ];

        self.help_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Dismiss, "?", "Close help"),
            Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "Close help"),
        ];
    }

    /// Resolve a key event to an action.
    ///
    /// Global bindings win; `help_visible` selects the overlay's bindings
    /// instead of the menu's.
    pub fn resolve(&self, event: &KeyEvent, help_visible: bool) -> Option<KeyAction> {
        let scoped = if help_visible {
            &self.help_bindings
        } else {
            &self.menu_bindings
        };
        self.global_bindings
            .iter()
            .chain(scoped.iter())
            .find(|binding| binding.matches(event))
            .map(|binding| binding.action)
    }

    /// Help overlay content, one entry per distinct display label
    pub fn get_help_content(&self) -> Vec<HelpSection> {
        // Single-key aliases ("k", "j", "g", "G") are folded into the
        // combined labels of their arrow/Home/End bindings.
        let navigation = self
            .menu_bindings
            .iter()
            .filter(|b| !matches!(b.key, KeyCode::Char('k' | 'j' | 'g' | 'G')))
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();

        let general = self
            .global_bindings
            .iter()
            .chain(self.help_bindings.iter().filter(|b| b.key == KeyCode::Esc))
            .map(|b| (b.display.clone(), b.description.clone()))
            .collect();

        vec![
            HelpSection {
                title: "Navigation".to_string(),
                items: navigation,
            },
            HelpSection {
                title: "General".to_string(),
                items: general,
            },
        ]
    }
}
