use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Open key/value bag used for props the typed variants do not model.
pub type PropMap = Map<String, Value>;

/// The fixed set of component types the builder knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Text,
    Form,
    Table,
    Chart,
    Card,
    Button,
    Input,
    DataTable,
    DataChart,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Text,
        ComponentKind::Form,
        ComponentKind::Table,
        ComponentKind::Chart,
        ComponentKind::Card,
        ComponentKind::Button,
        ComponentKind::Input,
        ComponentKind::DataTable,
        ComponentKind::DataChart,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Text => "text",
            ComponentKind::Form => "form",
            ComponentKind::Table => "table",
            ComponentKind::Chart => "chart",
            ComponentKind::Card => "card",
            ComponentKind::Button => "button",
            ComponentKind::Input => "input",
            ComponentKind::DataTable => "data_table",
            ComponentKind::DataChart => "data_chart",
        }
    }

    /// Containers are the only kinds allowed to carry children.
    pub fn is_container(&self) -> bool {
        matches!(self, ComponentKind::Card | ComponentKind::Form)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::InvalidValue(format!("unknown component type: {}", s)))
    }
}

/// Grid slot of a component. Stored, not interpreted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Position {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Binds a component to one of the owning view's queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataBinding {
    pub query_id: String,
    /// Component-local field name -> query result column name.
    #[serde(default)]
    pub field_mapping: BTreeMap<String, String>,
    /// Refresh interval in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<u64>,
    #[serde(default)]
    pub cache_enabled: bool,
}

impl DataBinding {
    pub fn new(query_id: impl Into<String>) -> Self {
        Self {
            query_id: query_id.into(),
            field_mapping: BTreeMap::new(),
            refresh_interval: None,
            cache_enabled: false,
        }
    }

    pub fn map_field(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.field_mapping.insert(field.into(), column.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVariant {
    H1,
    H2,
    P,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Primary,
    Muted,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Default,
    Sm,
    Lg,
    Icon,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TextProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<TextVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(flatten)]
    pub extra: PropMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: PropMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ButtonProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    /// Name of the action to run when the button is activated.
    #[serde(rename = "onClick", default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<String>,
    #[serde(flatten)]
    pub extra: PropMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputProps {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(flatten)]
    pub extra: PropMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub extra: PropMap,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FormField>,
    #[serde(rename = "submitText", default, skip_serializing_if = "Option::is_none")]
    pub submit_text: Option<String>,
    #[serde(flatten)]
    pub extra: PropMap,
}

/// Props for the data-oriented kinds (tables and charts), which the renderer
/// does not paint yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenericProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: PropMap,
}

/// Props of a component, keyed by its type. Only containers carry children.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentBody {
    Text(TextProps),
    Button(ButtonProps),
    Input(InputProps),
    Table(GenericProps),
    Chart(GenericProps),
    DataTable(GenericProps),
    DataChart(GenericProps),
    Card {
        props: CardProps,
        children: Vec<ViewComponent>,
    },
    Form {
        props: FormProps,
        children: Vec<ViewComponent>,
    },
    /// A type this build does not recognize. Kept verbatim so it survives a
    /// load/save cycle.
    Unknown {
        kind: String,
        props: PropMap,
        children: Vec<ViewComponent>,
    },
}

impl ComponentBody {
    pub fn kind(&self) -> Option<ComponentKind> {
        match self {
            ComponentBody::Text(_) => Some(ComponentKind::Text),
            ComponentBody::Button(_) => Some(ComponentKind::Button),
            ComponentBody::Input(_) => Some(ComponentKind::Input),
            ComponentBody::Table(_) => Some(ComponentKind::Table),
            ComponentBody::Chart(_) => Some(ComponentKind::Chart),
            ComponentBody::DataTable(_) => Some(ComponentKind::DataTable),
            ComponentBody::DataChart(_) => Some(ComponentKind::DataChart),
            ComponentBody::Card { .. } => Some(ComponentKind::Card),
            ComponentBody::Form { .. } => Some(ComponentKind::Form),
            ComponentBody::Unknown { .. } => None,
        }
    }

    /// The `type` string as it appears in stored JSON.
    pub fn kind_name(&self) -> &str {
        match self {
            ComponentBody::Unknown { kind, .. } => kind,
            other => other.kind().map(|k| k.as_str()).unwrap_or_default(),
        }
    }

    pub fn children(&self) -> &[ViewComponent] {
        match self {
            ComponentBody::Card { children, .. }
            | ComponentBody::Form { children, .. }
            | ComponentBody::Unknown { children, .. } => children,
            _ => &[],
        }
    }

    /// `None` for leaf kinds.
    pub fn children_mut(&mut self) -> Option<&mut Vec<ViewComponent>> {
        match self {
            ComponentBody::Card { children, .. }
            | ComponentBody::Form { children, .. }
            | ComponentBody::Unknown { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Empty body of the given kind.
    pub fn empty(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Text => ComponentBody::Text(TextProps::default()),
            ComponentKind::Button => ComponentBody::Button(ButtonProps::default()),
            ComponentKind::Input => ComponentBody::Input(InputProps::default()),
            ComponentKind::Table => ComponentBody::Table(GenericProps::default()),
            ComponentKind::Chart => ComponentBody::Chart(GenericProps::default()),
            ComponentKind::DataTable => ComponentBody::DataTable(GenericProps::default()),
            ComponentKind::DataChart => ComponentBody::DataChart(GenericProps::default()),
            ComponentKind::Card => ComponentBody::Card {
                props: CardProps::default(),
                children: Vec::new(),
            },
            ComponentKind::Form => ComponentBody::Form {
                props: FormProps::default(),
                children: Vec::new(),
            },
        }
    }

    /// Props serialized back into the open map form.
    pub fn props_map(&self) -> PropMap {
        match self {
            ComponentBody::Text(p) => to_prop_map(p),
            ComponentBody::Button(p) => to_prop_map(p),
            ComponentBody::Input(p) => to_prop_map(p),
            ComponentBody::Table(p)
            | ComponentBody::Chart(p)
            | ComponentBody::DataTable(p)
            | ComponentBody::DataChart(p) => to_prop_map(p),
            ComponentBody::Card { props, .. } => to_prop_map(props),
            ComponentBody::Form { props, .. } => to_prop_map(props),
            ComponentBody::Unknown { props, .. } => props.clone(),
        }
    }

    /// Rebuild the body from a `type` string, an open props map and children.
    ///
    /// Never fails. A prop whose value does not fit its typed field is kept in
    /// the `extra` map, so the rest of the component still renders and the
    /// value survives a save. Children given to a leaf kind are dropped.
    pub fn from_parts(kind: &str, props: PropMap, children: Vec<ViewComponent>) -> Self {
        let Ok(known) = kind.parse::<ComponentKind>() else {
            return ComponentBody::Unknown {
                kind: kind.to_string(),
                props,
                children,
            };
        };

        match known {
            ComponentKind::Text => ComponentBody::Text(parse_props(props)),
            ComponentKind::Button => ComponentBody::Button(parse_props(props)),
            ComponentKind::Input => ComponentBody::Input(parse_props(props)),
            ComponentKind::Table => ComponentBody::Table(parse_props(props)),
            ComponentKind::Chart => ComponentBody::Chart(parse_props(props)),
            ComponentKind::DataTable => ComponentBody::DataTable(parse_props(props)),
            ComponentKind::DataChart => ComponentBody::DataChart(parse_props(props)),
            ComponentKind::Card => ComponentBody::Card {
                props: parse_props(props),
                children,
            },
            ComponentKind::Form => ComponentBody::Form {
                props: parse_props(props),
                children,
            },
        }
    }

    /// Typed props whose stored value could not be read; they are kept
    /// verbatim in `extra` and ignored by the renderer.
    pub fn malformed_props(&self) -> Vec<&str> {
        match self {
            ComponentBody::Text(p) => p.malformed(),
            ComponentBody::Button(p) => p.malformed(),
            ComponentBody::Input(p) => p.malformed(),
            ComponentBody::Table(p)
            | ComponentBody::Chart(p)
            | ComponentBody::DataTable(p)
            | ComponentBody::DataChart(p) => p.malformed(),
            ComponentBody::Card { props, .. } => props.malformed(),
            ComponentBody::Form { props, .. } => props.malformed(),
            ComponentBody::Unknown { .. } => Vec::new(),
        }
    }
}

/// A typed props struct with a catch-all map for everything else.
trait TypedProps: DeserializeOwned + Default {
    /// Keys the struct reads into typed fields.
    const FIELDS: &'static [&'static str];

    fn extra(&self) -> &PropMap;

    fn extra_mut(&mut self) -> &mut PropMap;

    fn malformed(&self) -> Vec<&str> {
        self.extra()
            .keys()
            .map(String::as_str)
            .filter(|key| Self::FIELDS.contains(key))
            .collect()
    }
}

macro_rules! typed_props {
    ($($ty:ty => [$($field:literal),*]),* $(,)?) => {
        $(impl TypedProps for $ty {
            const FIELDS: &'static [&'static str] = &[$($field),*];

            fn extra(&self) -> &PropMap {
                &self.extra
            }

            fn extra_mut(&mut self) -> &mut PropMap {
                &mut self.extra
            }
        })*
    };
}

typed_props! {
    TextProps => ["variant", "content", "color"],
    CardProps => ["title", "content"],
    ButtonProps => ["text", "variant", "size", "onClick"],
    InputProps => ["type", "placeholder"],
    FormProps => ["title", "fields", "submitText"],
    GenericProps => ["title"],
}

/// Read `props` into `T`, setting aside the entries that do not fit.
fn parse_props<T: TypedProps>(props: PropMap) -> T {
    if let Ok(parsed) = serde_json::from_value(Value::Object(props.clone())) {
        return parsed;
    }

    let mut readable = PropMap::new();
    let mut rejected = PropMap::new();
    for (key, value) in props {
        let single = Value::Object(PropMap::from_iter([(key.clone(), value.clone())]));
        if serde_json::from_value::<T>(single).is_ok() {
            readable.insert(key, value);
        } else {
            rejected.insert(key, value);
        }
    }

    let mut parsed: T = serde_json::from_value(Value::Object(readable)).unwrap_or_default();
    parsed.extra_mut().extend(rejected);
    parsed
}

fn to_prop_map<T: Serialize>(props: &T) -> PropMap {
    match serde_json::to_value(props) {
        Ok(Value::Object(map)) => map,
        _ => PropMap::new(),
    }
}

/// A node in a view's component tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawComponent", into = "RawComponent")]
pub struct ViewComponent {
    /// Unique within the owning view.
    pub id: String,
    pub position: Position,
    pub data_binding: Option<DataBinding>,
    pub body: ComponentBody,
}

impl ViewComponent {
    pub fn new(id: impl Into<String>, body: ComponentBody) -> Self {
        Self {
            id: id.into(),
            position: Position::default(),
            data_binding: None,
            body,
        }
    }

    pub fn text(id: impl Into<String>, props: TextProps) -> Self {
        Self::new(id, ComponentBody::Text(props))
    }

    pub fn button(id: impl Into<String>, props: ButtonProps) -> Self {
        Self::new(id, ComponentBody::Button(props))
    }

    pub fn input(id: impl Into<String>, props: InputProps) -> Self {
        Self::new(id, ComponentBody::Input(props))
    }

    pub fn card(id: impl Into<String>, props: CardProps, children: Vec<ViewComponent>) -> Self {
        Self::new(id, ComponentBody::Card { props, children })
    }

    pub fn form(id: impl Into<String>, props: FormProps, children: Vec<ViewComponent>) -> Self {
        Self::new(id, ComponentBody::Form { props, children })
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_binding(mut self, binding: DataBinding) -> Self {
        self.data_binding = Some(binding);
        self
    }

    pub fn kind_name(&self) -> &str {
        self.body.kind_name()
    }

    pub fn children(&self) -> &[ViewComponent] {
        self.body.children()
    }

    /// Pre-order walk over this node and its descendants. Depth starts at 1.
    pub fn walk<'a>(&'a self, depth: usize, visit: &mut impl FnMut(&'a ViewComponent, usize)) {
        visit(self, depth);
        for child in self.children() {
            child.walk(depth + 1, visit);
        }
    }

    pub fn find(&self, id: &str) -> Option<&ViewComponent> {
        if self.id == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut ViewComponent> {
        if self.id == id {
            return Some(self);
        }
        self.body
            .children_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }
}

#[derive(Serialize, Deserialize)]
struct RawComponent {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    props: PropMap,
    #[serde(default)]
    position: Position,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ViewComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_binding: Option<DataBinding>,
}

impl From<RawComponent> for ViewComponent {
    fn from(raw: RawComponent) -> Self {
        Self {
            body: ComponentBody::from_parts(&raw.kind, raw.props, raw.children),
            id: raw.id,
            position: raw.position,
            data_binding: raw.data_binding,
        }
    }
}

impl From<ViewComponent> for RawComponent {
    fn from(component: ViewComponent) -> Self {
        let kind = component.body.kind_name().to_string();
        let props = component.body.props_map();
        let children = match component.body {
            ComponentBody::Card { children, .. }
            | ComponentBody::Form { children, .. }
            | ComponentBody::Unknown { children, .. } => children,
            _ => Vec::new(),
        };
        Self {
            id: component.id,
            kind,
            props,
            position: component.position,
            children,
            data_binding: component.data_binding,
        }
    }
}
