//! ViewPort - typed bindings onto the game page
//!
//! The page is server-rendered with a fixed set of element ids. This port
//! names those elements as enums so the controllers never deal in raw ids
//! and can be tested without a document.

use std::fmt;

/// Text-bearing elements updated by the controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Distance,
    Status,
    ScoreCounter,
    MovesCounter,
    /// Secondary moves label in the game header (optional)
    MovesLabel,
    CitiesVisited,
    /// Duplicate of `CitiesVisited` in the header (optional)
    MainCitiesCount,
    CurrentLocation,
    /// Duplicate of `CurrentLocation` in the header (optional)
    MainCurrentLocation,
    CityName,
    RiddleText,
    EventTitle,
    EventDescription,
    VolumeDisplay,
}

impl TextField {
    pub const ALL: [TextField; 14] = [
        TextField::Distance,
        TextField::Status,
        TextField::ScoreCounter,
        TextField::MovesCounter,
        TextField::MovesLabel,
        TextField::CitiesVisited,
        TextField::MainCitiesCount,
        TextField::CurrentLocation,
        TextField::MainCurrentLocation,
        TextField::CityName,
        TextField::RiddleText,
        TextField::EventTitle,
        TextField::EventDescription,
        TextField::VolumeDisplay,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            TextField::Distance => "distance",
            TextField::Status => "status",
            TextField::ScoreCounter => "score-counter",
            TextField::MovesCounter => "moves-counter",
            TextField::MovesLabel => "moves",
            TextField::CitiesVisited => "cities-visited",
            TextField::MainCitiesCount => "main-cities-count",
            TextField::CurrentLocation => "current-location",
            TextField::MainCurrentLocation => "main-current-location",
            TextField::CityName => "cityName",
            TextField::RiddleText => "riddleText",
            TextField::EventTitle => "event-modal-title",
            TextField::EventDescription => "event-modal-description",
            TextField::VolumeDisplay => "volumeDisplay",
        }
    }

    /// Whether the page must provide this element
    pub fn is_required(&self) -> bool {
        !matches!(
            self,
            TextField::MovesLabel | TextField::MainCitiesCount | TextField::MainCurrentLocation
        )
    }
}

/// Modal dialogs on the game page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    /// City riddle, shown over a dimming overlay
    Riddle,
    /// Random event with choice buttons
    Event,
    ChateauReveal,
    ChateauArrival,
}

impl ModalKind {
    pub const ALL: [ModalKind; 4] = [
        ModalKind::Riddle,
        ModalKind::Event,
        ModalKind::ChateauReveal,
        ModalKind::ChateauArrival,
    ];

    pub fn element_id(&self) -> &'static str {
        match self {
            ModalKind::Riddle => "riddleSection",
            ModalKind::Event => "event-modal",
            ModalKind::ChateauReveal => "chateau-reveal",
            ModalKind::ChateauArrival => "chateau-arrival",
        }
    }

    /// CSS `display` value used when the modal is visible
    pub fn display_style(&self) -> &'static str {
        match self {
            ModalKind::Riddle => "block",
            _ => "flex",
        }
    }

    /// Riddle and event modals freeze movement while open
    pub fn gates_movement(&self) -> bool {
        matches!(self, ModalKind::Riddle | ModalKind::Event)
    }
}

/// Flash message styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

/// Typed view bindings
///
/// Implementations resolve their elements once and are then cheap to call.
/// Missing optional elements are silently skipped.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ViewPort {
    fn set_text(&self, field: TextField, text: &str);

    /// Stamina bar width (e.g. `"45%"`) and background color
    fn set_stamina_bar(&self, width: &str, color: &str);

    /// Show or hide a modal. The riddle modal carries its overlay with it.
    fn set_modal_visible(&self, modal: ModalKind, visible: bool);

    /// Toggle the `disabled` class on the movement control panel
    fn set_controls_disabled(&self, disabled: bool);

    /// Current content of the riddle answer input
    fn riddle_answer(&self) -> String;

    fn set_riddle_answer(&self, value: &str);

    fn focus_riddle_answer(&self);

    /// Replace the event modal buttons, one per choice label
    fn render_event_choices(&self, choices: &[String]);

    /// Replace the companion list. An empty slice renders the placeholder.
    fn render_companions(&self, companions: &[String]);

    /// Replace the château-arrival modal body with pre-rendered markup
    fn set_chateau_arrival_content(&self, html: &str);

    /// Transient flash message at the top of the info panel
    fn show_message(&self, message: &str, kind: MessageKind);

    /// Drop keyboard focus from whatever element holds it
    fn blur_active_element(&self);

    fn navigate(&self, url: &str);
}
