use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// The burger button was pressed.
    Toggle,
    /// A link inside the menu was followed; always closes.
    NavLinkActivated,
}

impl MenuState {
    pub fn apply(self, action: MenuAction) -> Self {
        match action {
            MenuAction::Toggle => Self { open: !self.open },
            MenuAction::NavLinkActivated => Self { open: false },
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// Inline `overflow` for `<body>`: locked while the menu covers the page,
/// otherwise the property is removed.
pub fn body_overflow(open: bool) -> Option<&'static str> {
    open.then_some("hidden")
}
