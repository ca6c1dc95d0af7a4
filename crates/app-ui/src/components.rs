//! UI component library for Nexo Paciente
//!
//! Components are plain Rust structs with serializable properties. A screen
//! renders to a [`ViewNode`] tree which the host platform draws with its own
//! native primitives; nothing here performs layout or drawing.
//!
//! # Component Design
//!
//! - Type-safe props with builder patterns
//! - Event hooks are string identifiers ([`EventHandler`]) that come back to
//!   the screen as a `UiEvent`
//! - List items carry a stable key so the host can diff rows
//!
//! # Available Components
//!
//! - [`Button`] - Solid, outlined or text button
//! - [`Text`] - Typography component
//! - [`Container`] - Row/column layout
//! - [`Input`] - Single-line text field
//! - [`Icon`] / [`Image`] - Named icon or bundled asset
//! - [`Card`] - Elevated surface
//! - [`ListView`] - Keyed, lazily rendered list
//! - [`TopBar`] / [`TabBar`] / [`Scaffold`] - Screen chrome

use crate::theme::Color;
use crate::tokens::{elevation, radius, sizing};
use crate::typography::TypographyVariant;
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Stable node id
pub type ComponentId = String;

/// Opaque handler id; the host echoes it back in a `UiEvent`
pub type EventHandler = String;

/// Visual overrides shared by every node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProps {
    /// Inner spacing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// Requested width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Requested height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Fill color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Corner radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Share of remaining space along the parent's main axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    /// Overrides the parent's cross axis alignment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Alignment>,
}

fn is_default_style(style: &StyleProps) -> bool {
    style == &StyleProps::default()
}

/// Spacing values (padding)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Spacing {
    /// Same amount on every side
    Uniform(f32),
    /// Same vertical and same horizontal amount
    Symmetric {
        /// Top and bottom
        vertical: f32,
        /// Left and right
        horizontal: f32,
    },
}

impl Spacing {
    /// Same amount on every side
    pub fn uniform(value: f32) -> Self {
        Spacing::Uniform(value)
    }

    /// Vertical and horizontal pair
    pub fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Spacing::Symmetric {
            vertical,
            horizontal,
        }
    }
}

/// Dimension value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Fixed size in dp
    Fixed(f32),
    /// Fill the parent
    Fill,
    /// Wrap content
    #[default]
    Auto,
}

/// Cross axis alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Align to start
    #[default]
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Main-axis arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Pack at start
    #[default]
    Start,
    /// Center
    Center,
    /// Equal space around items
    SpaceAround,
}

/// Layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Vertical
    #[default]
    Column,
    /// Horizontal
    Row,
}

// =============================================================================
// View Tree
// =============================================================================

/// A node of a rendered screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewNode {
    /// Layout container
    Container(Container),
    /// Text
    Text(Text),
    /// Button
    Button(Button),
    /// Text field
    Input(Input),
    /// Icon
    Icon(Icon),
    /// Bundled image asset
    Image(Image),
    /// Elevated card
    Card(Card),
    /// Keyed list
    List(ListView),
    /// Empty space
    Spacer(Spacer),
    /// Screen chrome with optional bars
    Scaffold(Scaffold),
}

impl ViewNode {
    /// Direct children of this node
    pub fn children(&self) -> Vec<&ViewNode> {
        match self {
            ViewNode::Container(c) => c.children.iter().collect(),
            ViewNode::Card(c) => c.children.iter().collect(),
            ViewNode::List(l) => l.items.iter().map(|i| &i.content).collect(),
            ViewNode::Scaffold(s) => vec![s.body.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Visit this node and every descendant, depth first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a ViewNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// All visible strings in document order, including bar titles and button labels
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        if let ViewNode::Scaffold(s) = self {
            if let Some(bar) = &s.top_bar {
                out.push(bar.title.clone());
            }
        }
        self.walk(&mut |node| match node {
            ViewNode::Text(t) => out.push(t.content.clone()),
            ViewNode::Button(b) => out.push(b.label.clone()),
            ViewNode::Input(i) => {
                if let Some(label) = &i.label {
                    out.push(label.clone());
                }
            }
            ViewNode::Scaffold(s) if !std::ptr::eq(node, self) => {
                if let Some(bar) = &s.top_bar {
                    out.push(bar.title.clone());
                }
            }
            _ => {}
        });
        if let ViewNode::Scaffold(s) = self {
            if let Some(tabs) = &s.bottom_bar {
                out.extend(tabs.items.iter().map(|i| i.label.clone()));
            }
        }
        out
    }

    /// Whether any text, label or title equals `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t == needle)
    }

    /// First keyed list in the tree
    pub fn find_list(&self) -> Option<&ListView> {
        let mut found = None;
        self.walk(&mut |node| {
            if found.is_none() {
                if let ViewNode::List(list) = node {
                    found = Some(list);
                }
            }
        });
        found
    }

    /// First button wired to `handler`
    pub fn find_button(&self, handler: &str) -> Option<&Button> {
        let mut found = None;
        self.walk(&mut |node| {
            if let ViewNode::Button(b) = node {
                if found.is_none() && b.on_press.as_deref() == Some(handler) {
                    found = Some(b);
                }
            }
        });
        found
    }

    /// Text field with the given id
    pub fn find_input(&self, id: &str) -> Option<&Input> {
        let mut found = None;
        self.walk(&mut |node| {
            if let ViewNode::Input(i) = node {
                if found.is_none() && i.id.as_deref() == Some(id) {
                    found = Some(i);
                }
            }
        });
        found
    }
}

impl From<Container> for ViewNode {
    fn from(c: Container) -> Self {
        ViewNode::Container(c)
    }
}

impl From<Text> for ViewNode {
    fn from(t: Text) -> Self {
        ViewNode::Text(t)
    }
}

impl From<Button> for ViewNode {
    fn from(b: Button) -> Self {
        ViewNode::Button(b)
    }
}

impl From<Input> for ViewNode {
    fn from(i: Input) -> Self {
        ViewNode::Input(i)
    }
}

impl From<Icon> for ViewNode {
    fn from(i: Icon) -> Self {
        ViewNode::Icon(i)
    }
}

impl From<Image> for ViewNode {
    fn from(i: Image) -> Self {
        ViewNode::Image(i)
    }
}

impl From<Card> for ViewNode {
    fn from(c: Card) -> Self {
        ViewNode::Card(c)
    }
}

impl From<ListView> for ViewNode {
    fn from(l: ListView) -> Self {
        ViewNode::List(l)
    }
}

impl From<Spacer> for ViewNode {
    fn from(s: Spacer) -> Self {
        ViewNode::Spacer(s)
    }
}

impl From<Scaffold> for ViewNode {
    fn from(s: Scaffold) -> Self {
        ViewNode::Scaffold(s)
    }
}

// =============================================================================
// Button Component
// =============================================================================

/// Visual weight of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Filled background
    #[default]
    Solid,
    /// Outlined with border
    Outline,
    /// Text only, no container
    Text,
    /// Icon only (top bar actions)
    Icon,
}

/// A pressable label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Visible label, also the accessible label
    pub label: String,
    /// Visual weight
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Container color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Label color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<Color>,
    /// Label typography
    #[serde(default)]
    pub text_variant: TypographyVariant,
    /// Handler id fired on press
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Icon shown before the label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Visual overrides
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Button {
    /// Create a new solid button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            color: None,
            text_color: None,
            text_variant: TypographyVariant::BodyMedium,
            on_press: None,
            icon: None,
            style: StyleProps::default(),
        }
    }

    /// Full-width primary action button (50dp, rounded 8dp)
    pub fn primary(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self::new(label)
            .with_color(color)
            .with_text_color(crate::theme::brand::WHITE)
            .with_text_variant(TypographyVariant::ButtonLarge)
            .with_style(StyleProps {
                width: Some(Dimension::Fill),
                height: Some(Dimension::Fixed(sizing::BUTTON_HEIGHT)),
                border_radius: Some(radius::BUTTON),
                ..Default::default()
            })
    }

    /// Text-only button
    pub fn text(label: impl Into<String>) -> Self {
        Self::new(label).with_variant(ButtonVariant::Text)
    }

    /// Icon-only button; the label is kept for accessibility
    pub fn icon_only(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(label)
            .with_variant(ButtonVariant::Icon)
            .with_icon(Icon::new(icon))
    }

    /// Change the variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the container color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the label color
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    /// Set the label typography
    pub fn with_text_variant(mut self, variant: TypographyVariant) -> Self {
        self.text_variant = variant;
        self
    }

    /// Handler id fired on press
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Leading icon
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Replace the style overrides
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Align within the parent
    pub fn align_self(mut self, alignment: Alignment) -> Self {
        self.style.align_self = Some(alignment);
        self
    }
}

// =============================================================================
// Text Component
// =============================================================================

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Start aligned (default)
    #[default]
    Start,
    /// Center aligned
    Center,
}

/// A run of styled text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Displayed string
    pub content: String,
    /// Type scale entry
    #[serde(default)]
    pub variant: TypographyVariant,
    /// Font weight override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    /// Overrides the variant color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Alignment within the line
    #[serde(default)]
    pub align: TextAlign,
    /// Visual overrides
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Text {
    /// Create new body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TypographyVariant::BodyLarge,
            weight: None,
            color: None,
            align: TextAlign::Start,
            style: StyleProps::default(),
        }
    }

    /// Use a type scale entry
    pub fn with_variant(mut self, variant: TypographyVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Render in bold
    pub fn bold(mut self) -> Self {
        self.weight = Some(crate::typography::font_weight::BOLD);
        self
    }

    /// Set font weight
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Override the text color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Align the text
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Replace the style overrides
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }
}

// =============================================================================
// Container Component
// =============================================================================

/// Layout container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Layout direction
    #[serde(default)]
    pub direction: FlexDirection,
    /// Main axis arrangement
    #[serde(default)]
    pub justify: JustifyContent,
    /// Cross axis alignment
    #[serde(default)]
    pub align: Alignment,
    /// Space between children
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Whether the content scrolls
    #[serde(default)]
    pub scrollable: bool,
    /// Visual overrides
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
    /// Children
    #[serde(default)]
    pub children: Vec<ViewNode>,
}

impl Container {
    /// Horizontal stack
    pub fn row() -> Self {
        Self {
            direction: FlexDirection::Row,
            ..Default::default()
        }
    }

    /// Vertical stack
    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    /// Main axis distribution
    pub fn with_justify(mut self, justify: JustifyContent) -> Self {
        self.justify = justify;
        self
    }

    /// Cross axis alignment
    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Space between children
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Make scrollable
    pub fn scrollable(mut self) -> Self {
        self.scrollable = true;
        self
    }

    /// Inner spacing
    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.style.padding = Some(padding);
        self
    }

    /// Fill color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.style.background_color = Some(color.into());
        self
    }

    /// Replace the style overrides
    pub fn with_style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }
}

// =============================================================================
// Input Component
// =============================================================================

/// Keyboard and masking mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Editable field
    #[default]
    Text,
    /// Password input (masked, password keyboard)
    Password,
}

/// Outlined single-line text field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Field identifier, echoed back in change events
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Keyboard and masking mode
    #[serde(default)]
    pub input_type: InputType,
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Floating label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Single line only
    #[serde(default)]
    pub single_line: bool,
    /// Handler id fired on each edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change: Option<EventHandler>,
    /// Visual overrides
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Input {
    /// Create a new single-line text input
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            input_type: InputType::Text,
            value: String::new(),
            label: None,
            single_line: true,
            on_change: None,
            style: StyleProps {
                width: Some(Dimension::Fill),
                ..Default::default()
            },
        }
    }

    /// Create a masked password input
    pub fn password(id: impl Into<String>) -> Self {
        Self {
            input_type: InputType::Password,
            ..Self::new(id)
        }
    }

    /// Visible label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set current value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Handler id fired on each edit
    pub fn on_change(mut self, handler: impl Into<String>) -> Self {
        self.on_change = Some(handler.into());
        self
    }

    /// Whether the value is masked on screen
    pub fn is_masked(&self) -> bool {
        self.input_type == InputType::Password
    }
}

// =============================================================================
// Icon & Image Components
// =============================================================================

/// A symbolic icon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Symbolic icon name
    pub name: String,
    /// Size in dp
    pub size: f32,
    /// Tint override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Screen reader label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Icon {
    /// Icon with default size
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: sizing::icon::MD,
            color: None,
            label: None,
        }
    }

    /// Size in points
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set icon tint
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Screen reader label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// How an image fits its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    /// Scale to fit entirely
    #[default]
    Fit,
    /// Scale to fill, cropping
    Crop,
}

/// Bundled image asset, referenced by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Asset name
    pub asset: String,
    /// Accessible description
    pub content_description: String,
    /// Fit mode
    #[serde(default)]
    pub fit: ImageFit,
    /// Visual overrides
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: StyleProps,
}

impl Image {
    /// Create an image
    pub fn new(asset: impl Into<String>, content_description: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            content_description: content_description.into(),
            fit: ImageFit::Fit,
            style: StyleProps::default(),
        }
    }

    /// Take a weighted share of the parent's height
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.style.weight = Some(weight);
        self
    }
}

// =============================================================================
// Card Component
// =============================================================================

/// Elevated surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Corner radius
    pub corner_radius: f32,
    /// Shadow elevation
    pub elevation: f32,
    /// Container color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Inner padding
    pub padding: f32,
    /// Cross axis alignment of children
    #[serde(default)]
    pub align: Alignment,
    /// Children, laid out as a column
    #[serde(default)]
    pub children: Vec<ViewNode>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            corner_radius: radius::CARD,
            elevation: elevation::LOW,
            color: None,
            padding: crate::tokens::spacing::SPACE_LG,
            align: Alignment::Start,
            children: Vec::new(),
        }
    }
}

impl Card {
    /// Create a card with default styling
    pub fn new() -> Self {
        Self::default()
    }

    /// Set corner radius
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set elevation
    pub fn with_elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation;
        self
    }

    /// Set container color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set inner padding
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Center children horizontally
    pub fn centered(mut self) -> Self {
        self.align = Alignment::Center;
        self
    }

    /// Append a child
    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }
}

// =============================================================================
// List Component
// =============================================================================

/// A keyed list row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Stable key
    pub key: String,
    /// Row content
    pub content: ViewNode,
}

/// Lazily rendered list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListView {
    /// Rows in display order
    pub items: Vec<ListItem>,
    /// Vertical gap between rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Padding around the list content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_padding: Option<Spacing>,
}

impl ListView {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gap between rows
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set content padding
    pub fn with_content_padding(mut self, padding: Spacing) -> Self {
        self.content_padding = Some(padding);
        self
    }

    /// Append a keyed row
    pub fn item(mut self, key: impl Into<String>, content: impl Into<ViewNode>) -> Self {
        self.items.push(ListItem {
            key: key.into(),
            content: content.into(),
        });
        self
    }

    /// Row keys in order
    pub fn keys(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.key.as_str()).collect()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no rows
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Spacer Component
// =============================================================================

/// Empty space, either fixed or weighted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spacer {
    /// Fixed size along the parent's main axis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    /// Weighted share of the remaining space
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

impl Spacer {
    /// Fixed-size spacer
    pub fn fixed(size: f32) -> Self {
        Self {
            size: Some(size),
            weight: None,
        }
    }

    /// Weighted spacer
    pub fn weight(weight: f32) -> Self {
        Self {
            size: None,
            weight: Some(weight),
        }
    }
}

// =============================================================================
// Screen Chrome
// =============================================================================

/// Top app bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopBar {
    /// Heading
    pub title: String,
    /// Title typography
    #[serde(default)]
    pub title_variant: TypographyVariant,
    /// Bold title
    #[serde(default)]
    pub title_bold: bool,
    /// Title color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<Color>,
    /// Bar background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Trailing icon actions
    #[serde(default)]
    pub actions: Vec<Button>,
}

impl TopBar {
    /// Create a top bar
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_variant: TypographyVariant::TitleLarge,
            title_bold: false,
            title_color: None,
            background: None,
            actions: Vec::new(),
        }
    }

    /// Bold title
    pub fn bold(mut self) -> Self {
        self.title_bold = true;
        self
    }

    /// Set title typography
    pub fn with_title_variant(mut self, variant: TypographyVariant) -> Self {
        self.title_variant = variant;
        self
    }

    /// Set title color
    pub fn with_title_color(mut self, color: impl Into<String>) -> Self {
        self.title_color = Some(color.into());
        self
    }

    /// Set background
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Add an action
    pub fn with_action(mut self, action: Button) -> Self {
        self.actions.push(action);
        self
    }
}

/// Tab bar item representing a tab destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarItem {
    /// Route name of the destination
    pub id: String,
    /// Icon name
    pub icon: String,
    /// Visible label
    pub label: String,
    /// Highlighted as the current tab
    pub is_active: bool,
}

impl TabBarItem {
    /// Bottom bar entry
    pub fn new(id: impl Into<String>, icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            label: label.into(),
            is_active: false,
        }
    }

    /// Mark as current
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}

/// Bottom navigation bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBar {
    /// One item per tab, in display order
    pub items: Vec<TabBarItem>,
    /// Render labels under the icons
    pub show_labels: bool,
    /// Bar background
    pub background: Color,
    /// Icon and label color of the active item
    pub active_color: Color,
    /// Icon and label color of inactive items
    pub inactive_color: Color,
    /// On tab press event handler; the item id is sent as the event key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_tab_press: Option<EventHandler>,
}

impl TabBar {
    /// Create a tab bar with the given items
    pub fn with_items(items: Vec<TabBarItem>) -> Self {
        Self {
            items,
            show_labels: true,
            background: crate::theme::brand::WHITE.to_string(),
            active_color: crate::theme::brand::PRIMARY.to_string(),
            inactive_color: crate::theme::brand::GRAY.to_string(),
            on_tab_press: None,
        }
    }

    /// Mark the tab with `id` as current
    pub fn set_active(mut self, tab_id: &str) -> Self {
        for item in &mut self.items {
            item.is_active = item.id == tab_id;
        }
        self
    }

    /// Toggle labels under the icons
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Handler id fired with the tab id as key
    pub fn on_press(mut self, handler: impl Into<EventHandler>) -> Self {
        self.on_tab_press = Some(handler.into());
        self
    }

    /// Id of the highlighted tab, if any
    pub fn active_tab(&self) -> Option<&str> {
        self.items
            .iter()
            .find(|i| i.is_active)
            .map(|i| i.id.as_str())
    }
}

/// Screen scaffold: optional top bar, body, optional bottom bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaffold {
    /// Top app bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_bar: Option<TopBar>,
    /// Body
    pub body: Box<ViewNode>,
    /// Bottom navigation bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_bar: Option<TabBar>,
}

impl Scaffold {
    /// Create a scaffold around a body
    pub fn new(body: impl Into<ViewNode>) -> Self {
        Self {
            top_bar: None,
            body: Box::new(body.into()),
            bottom_bar: None,
        }
    }

    /// Set the top bar
    pub fn with_top_bar(mut self, bar: TopBar) -> Self {
        self.top_bar = Some(bar);
        self
    }

    /// Set the bottom bar
    pub fn with_bottom_bar(mut self, bar: TabBar) -> Self {
        self.bottom_bar = Some(bar);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> ViewNode {
        Scaffold::new(
            Container::column()
                .child(Text::new("Hola"))
                .child(Button::primary("Entrar", "#007AFF").on_press("enter"))
                .child(
                    ListView::new()
                        .item("a", Card::new().child(Text::new("Fila A")))
                        .item("b", Card::new().child(Text::new("Fila B"))),
                ),
        )
        .with_top_bar(TopBar::new("Inicio"))
        .into()
    }

    #[test]
    fn test_texts_in_document_order() {
        let tree = sample_tree();
        assert_eq!(
            tree.texts(),
            vec!["Inicio", "Hola", "Entrar", "Fila A", "Fila B"]
        );
        assert!(tree.contains_text("Fila B"));
        assert!(!tree.contains_text("Fila C"));
    }

    #[test]
    fn test_find_list_and_button() {
        let tree = sample_tree();
        let list = tree.find_list().unwrap();
        assert_eq!(list.keys(), vec!["a", "b"]);
        assert_eq!(tree.find_button("enter").unwrap().label, "Entrar");
        assert!(tree.find_button("missing").is_none());
    }

    #[test]
    fn test_primary_button_style() {
        let button = Button::primary("Iniciar sesión", "#007AFF");
        assert_eq!(button.style.width, Some(Dimension::Fill));
        assert_eq!(button.style.height, Some(Dimension::Fixed(50.0)));
        assert_eq!(button.style.border_radius, Some(8.0));
        assert_eq!(button.text_color.as_deref(), Some("#FFFFFF"));
    }

    #[test]
    fn test_password_input_is_masked() {
        assert!(Input::password("password").is_masked());
        assert!(!Input::new("identifier").is_masked());
    }

    #[test]
    fn test_tab_bar_active() {
        let bar = TabBar::with_items(vec![
            TabBarItem::new("home", "home", "Home"),
            TabBarItem::new("citas", "calendar", "Citas"),
        ])
        .set_active("citas");
        assert_eq!(bar.active_tab(), Some("citas"));
        assert!(!bar.items[0].is_active);
    }

    #[test]
    fn test_view_tree_serialization() {
        let tree = sample_tree();
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json["type"], "scaffold");
        assert_eq!(json["body"]["type"], "container");
        assert_eq!(json["body"]["children"][1]["on_press"], "enter");

        let parsed: ViewNode = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, tree);
    }
}
