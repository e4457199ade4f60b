use erpview_types::{
    ButtonSize, ButtonVariant, ComponentBody, DynamicViewConfig, FormField, NARROW_GRID_COLS,
    TextColor, TextVariant, ViewComponent, ViewLayout,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::locale::Locale;

/// Label of a form's submit button when the form does not name one.
pub const DEFAULT_SUBMIT_TEXT: &str = "Enviar";

pub const TABLE_PLACEHOLDER: &str = "dynamic table under construction";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    Narrow,
    #[default]
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub viewport: Viewport,
    pub locale: Locale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Default,
    Primary,
    Muted,
}

impl From<Option<&TextColor>> for Tone {
    fn from(color: Option<&TextColor>) -> Self {
        match color {
            Some(TextColor::Primary) => Tone::Primary,
            Some(TextColor::Muted) => Tone::Muted,
            _ => Tone::Default,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormInput {
    pub name: Option<String>,
    pub label: String,
    pub input_type: String,
    pub placeholder: Option<String>,
    pub required: bool,
}

impl From<&FormField> for FormInput {
    fn from(field: &FormField) -> Self {
        Self {
            name: field.name.clone(),
            label: field
                .label
                .clone()
                .or_else(|| field.name.clone())
                .unwrap_or_default(),
            input_type: field
                .field_type
                .clone()
                .unwrap_or_else(|| "text".to_string()),
            placeholder: field.placeholder.clone(),
            required: field.required,
        }
    }
}

/// Output of the renderer: a UI tree independent of any toolkit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum UiNode {
    Heading {
        level: u8,
        text: String,
        tone: Tone,
    },
    Paragraph {
        text: String,
        tone: Tone,
    },
    Card {
        title: Option<String>,
        children: Vec<UiNode>,
    },
    Button {
        label: String,
        variant: String,
        size: String,
        /// Action name run through an [`ActionRegistry`] on activation.
        action: Option<String>,
    },
    Input {
        input_type: String,
        placeholder: Option<String>,
    },
    Form {
        title: Option<String>,
        fields: Vec<FormInput>,
        submit_label: String,
        children: Vec<UiNode>,
    },
    /// Visible stand-in for a component that is not painted.
    Placeholder {
        component_type: String,
        message: String,
    },
    Link {
        label: String,
        target: String,
    },
}

impl UiNode {
    pub fn children(&self) -> &[UiNode] {
        match self {
            UiNode::Card { children, .. } | UiNode::Form { children, .. } => children,
            _ => &[],
        }
    }

    /// Visible text of this node alone.
    pub fn text(&self) -> Option<&str> {
        match self {
            UiNode::Heading { text, .. } | UiNode::Paragraph { text, .. } => Some(text),
            UiNode::Button { label, .. } | UiNode::Link { label, .. } => Some(label),
            UiNode::Placeholder { message, .. } => Some(message),
            UiNode::Card { title, .. } | UiNode::Form { title, .. } => title.as_deref(),
            UiNode::Input { placeholder, .. } => placeholder.as_deref(),
        }
    }
}

/// Informational block shown under every dynamic view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataFooter {
    pub view_id: Option<String>,
    pub alias: String,
    pub version: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedView {
    pub name: String,
    pub alias: String,
    pub columns: u32,
    pub nodes: Vec<UiNode>,
    pub footer: MetadataFooter,
}

/// Top-level grid width for the viewport.
pub fn grid_columns(layout: &ViewLayout, viewport: Viewport) -> u32 {
    if layout.responsive && viewport == Viewport::Narrow {
        layout.grid_cols.min(NARROW_GRID_COLS)
    } else {
        layout.grid_cols
    }
}

pub fn render(config: &DynamicViewConfig, options: &RenderOptions) -> RenderedView {
    let nodes = config.components.iter().map(render_component).collect();
    let metadata = &config.metadata;

    RenderedView {
        name: config.name.clone(),
        alias: config.alias.clone(),
        columns: grid_columns(&config.layout, options.viewport),
        nodes,
        footer: MetadataFooter {
            view_id: config.id.clone(),
            alias: config.alias.clone(),
            version: metadata.version.clone(),
            created_at: options.locale.format_timestamp(&metadata.created_at),
            updated_at: options.locale.format_timestamp(&metadata.updated_at),
        },
    }
}

/// Render one component and its subtree. Never fails: kinds that are not
/// painted become placeholders.
pub fn render_component(component: &ViewComponent) -> UiNode {
    match &component.body {
        ComponentBody::Text(props) => {
            let text = props.content.clone().unwrap_or_default();
            let tone = Tone::from(props.color.as_ref());
            match props.variant {
                Some(TextVariant::H1) => UiNode::Heading {
                    level: 1,
                    text,
                    tone,
                },
                Some(TextVariant::H2) => UiNode::Heading {
                    level: 2,
                    text,
                    tone,
                },
                _ => UiNode::Paragraph { text, tone },
            }
        }
        ComponentBody::Card { props, children } => {
            let mut body = Vec::with_capacity(children.len() + 1);
            if let Some(content) = &props.content {
                body.push(UiNode::Paragraph {
                    text: content.clone(),
                    tone: Tone::Default,
                });
            }
            body.extend(children.iter().map(render_component));
            UiNode::Card {
                title: props.title.clone(),
                children: body,
            }
        }
        ComponentBody::Button(props) => UiNode::Button {
            label: props.text.clone().unwrap_or_default(),
            variant: variant_name(props.variant.as_ref()).to_string(),
            size: size_name(props.size.as_ref()).to_string(),
            action: props.on_click.clone(),
        },
        ComponentBody::Input(props) => UiNode::Input {
            input_type: props
                .input_type
                .clone()
                .unwrap_or_else(|| "text".to_string()),
            placeholder: props.placeholder.clone(),
        },
        ComponentBody::Form { props, children } => UiNode::Form {
            title: props.title.clone(),
            fields: props.fields.iter().map(FormInput::from).collect(),
            submit_label: props
                .submit_text
                .clone()
                .unwrap_or_else(|| DEFAULT_SUBMIT_TEXT.to_string()),
            children: children.iter().map(render_component).collect(),
        },
        ComponentBody::Table(_) => UiNode::Placeholder {
            component_type: "table".to_string(),
            message: TABLE_PLACEHOLDER.to_string(),
        },
        ComponentBody::Chart(_) | ComponentBody::DataTable(_) | ComponentBody::DataChart(_) => {
            let kind = component.kind_name();
            UiNode::Placeholder {
                component_type: kind.to_string(),
                message: format!("component type '{}' is not implemented yet", kind),
            }
        }
        ComponentBody::Unknown { kind, .. } => {
            tracing::debug!(component_id = %component.id, kind = %kind, "unknown component type");
            UiNode::Placeholder {
                component_type: kind.clone(),
                message: format!("unknown component type: {}", kind),
            }
        }
    }
}

fn variant_name(variant: Option<&ButtonVariant>) -> &'static str {
    match variant {
        Some(ButtonVariant::Destructive) => "destructive",
        Some(ButtonVariant::Outline) => "outline",
        Some(ButtonVariant::Secondary) => "secondary",
        Some(ButtonVariant::Ghost) => "ghost",
        Some(ButtonVariant::Link) => "link",
        _ => "default",
    }
}

fn size_name(size: Option<&ButtonSize>) -> &'static str {
    match size {
        Some(ButtonSize::Sm) => "sm",
        Some(ButtonSize::Lg) => "lg",
        Some(ButtonSize::Icon) => "icon",
        _ => "default",
    }
}

/// Screen shown when an alias resolves to nothing, linking back home.
pub fn render_not_found(alias: &str, home_alias: &str) -> Vec<UiNode> {
    vec![
        UiNode::Heading {
            level: 1,
            text: "View not implemented yet".to_string(),
            tone: Tone::Default,
        },
        UiNode::Paragraph {
            text: format!("No screen is available for '{}'.", alias),
            tone: Tone::Muted,
        },
        UiNode::Link {
            label: "Back to home".to_string(),
            target: home_alias.to_string(),
        },
    ]
}

type Action = Box<dyn Fn() + Send + Sync>;

/// Named callbacks that button `onClick` props refer to.
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, Action>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, action: impl Fn() + Send + Sync + 'static) {
        self.actions.insert(name.into(), Box::new(action));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Run the named action. Returns whether anything ran.
    pub fn activate(&self, name: &str) -> bool {
        match self.actions.get(name) {
            Some(action) => {
                action();
                true
            }
            None => {
                tracing::debug!(action = %name, "no action registered");
                false
            }
        }
    }

    /// Activate a button node. Anything else, or a button without an
    /// action, is a no-op.
    pub fn press(&self, node: &UiNode) -> bool {
        match node {
            UiNode::Button {
                action: Some(name), ..
            } => self.activate(name),
            _ => false,
        }
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.actions.keys().collect();
        names.sort();
        f.debug_struct("ActionRegistry")
            .field("actions", &names)
            .finish()
    }
}
