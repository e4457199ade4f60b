use erpview_engine::{MetadataFooter, Tone, UiNode};
use erpview_types::ViewType;
use std::fmt;

use crate::presentation::formatters::Palette;
use crate::presentation::view_models::RenderViewModel;

pub struct RenderView<'a> {
    data: &'a RenderViewModel,
    palette: Palette,
}

impl<'a> RenderView<'a> {
    pub fn new(data: &'a RenderViewModel, palette: Palette) -> Self {
        Self { data, palette }
    }
}

impl fmt::Display for RenderView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let palette = self.palette;
        match self.data {
            RenderViewModel::Dynamic { tier, view } => {
                writeln!(
                    f,
                    "{}  {}",
                    palette.bold(&view.name),
                    palette.dim(&format!(
                        "({}, {} columns, {})",
                        view.alias,
                        view.columns,
                        tier_label(*tier)
                    ))
                )?;
                writeln!(f)?;
                for node in &view.nodes {
                    write_node(f, node, 0, palette)?;
                }
                writeln!(f)?;
                write_footer(f, &view.footer, palette)
            }
            RenderViewModel::Static {
                alias,
                component_path,
            } => writeln!(
                f,
                "{} is a compiled screen at {}",
                palette.bold(alias),
                palette.cyan(component_path)
            ),
            RenderViewModel::Hardcoded { alias } => {
                writeln!(f, "{} is a compiled screen", palette.bold(alias))
            }
            RenderViewModel::NotFound { nodes, .. } => {
                for node in nodes {
                    write_node(f, node, 0, palette)?;
                }
                Ok(())
            }
        }
    }
}

fn tier_label(tier: ViewType) -> &'static str {
    match tier {
        ViewType::Database => "published",
        ViewType::Development => "development",
        ViewType::Hardcoded => "hardcoded",
    }
}

fn toned(palette: Palette, tone: Tone, text: &str) -> String {
    match tone {
        Tone::Default => text.to_string(),
        Tone::Primary => palette.cyan(text),
        Tone::Muted => palette.dim(text),
    }
}

/// One line per node, children indented two spaces under their container.
pub fn write_node(
    f: &mut fmt::Formatter,
    node: &UiNode,
    depth: usize,
    palette: Palette,
) -> fmt::Result {
    let indent = "  ".repeat(depth);

    match node {
        UiNode::Heading { level, text, tone } => writeln!(
            f,
            "{}{} {}",
            indent,
            "#".repeat(usize::from(*level)),
            palette.bold(&toned(palette, *tone, text))
        ),
        UiNode::Paragraph { text, tone } => writeln!(f, "{}{}", indent, toned(palette, *tone, text)),
        UiNode::Card { title, children } => {
            match title {
                Some(title) => writeln!(f, "{}[card] {}", indent, palette.bold(title))?,
                None => writeln!(f, "{}[card]", indent)?,
            }
            for child in children {
                write_node(f, child, depth + 1, palette)?;
            }
            Ok(())
        }
        UiNode::Button {
            label,
            variant,
            size,
            action,
        } => {
            let mut line = format!("{}[ {} ]", indent, palette.cyan(label));
            if variant != "default" {
                line.push_str(&format!(" {}", variant));
            }
            if size != "default" {
                line.push_str(&format!(" {}", size));
            }
            if let Some(action) = action {
                line.push_str(&format!(" -> {}", action));
            }
            writeln!(f, "{}", line)
        }
        UiNode::Input {
            input_type,
            placeholder,
        } => match placeholder {
            Some(placeholder) => writeln!(
                f,
                "{}<{}> {}",
                indent,
                input_type,
                palette.dim(placeholder)
            ),
            None => writeln!(f, "{}<{}>", indent, input_type),
        },
        UiNode::Form {
            title,
            fields,
            submit_label,
            children,
        } => {
            match title {
                Some(title) => writeln!(f, "{}[form] {}", indent, palette.bold(title))?,
                None => writeln!(f, "{}[form]", indent)?,
            }
            let inner = "  ".repeat(depth + 1);
            for field in fields {
                writeln!(
                    f,
                    "{}{}: <{}>{}",
                    inner,
                    field.label,
                    field.input_type,
                    if field.required { " *" } else { "" }
                )?;
            }
            for child in children {
                write_node(f, child, depth + 1, palette)?;
            }
            writeln!(f, "{}[ {} ]", inner, palette.cyan(submit_label))
        }
        UiNode::Placeholder {
            component_type,
            message,
        } => writeln!(
            f,
            "{}{}",
            indent,
            palette.yellow(&format!("({}) {}", component_type, message))
        ),
        UiNode::Link { label, target } => {
            writeln!(f, "{}-> {} ({})", indent, palette.cyan(label), target)
        }
    }
}

fn write_footer(f: &mut fmt::Formatter, footer: &MetadataFooter, palette: Palette) -> fmt::Result {
    writeln!(
        f,
        "{}",
        palette.dim(&format!(
            "id: {}  alias: {}  version: {}",
            footer.view_id.as_deref().unwrap_or("-"),
            footer.alias,
            footer.version
        ))
    )?;
    writeln!(
        f,
        "{}",
        palette.dim(&format!(
            "created: {}  updated: {}",
            footer.created_at, footer.updated_at
        ))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use erpview_engine::{RenderOptions, render, render_not_found};
    use erpview_testing::fixtures::demo01;

    #[test]
    fn test_demo01_text_layout() {
        let model = RenderViewModel::Dynamic {
            tier: ViewType::Development,
            view: render(&demo01(), &RenderOptions::default()),
        };
        let text = RenderView::new(&model, Palette::plain()).to_string();

        assert_eq!(
            text,
            "Demonstração  (demo01, 12 columns, development)\n\
             \n\
             [card] Boas-vindas\n  \
             Hello\n  \
             [ Go ] outline -> open_materials\n\
             (data_table) component type 'data_table' is not implemented yet\n\
             \n\
             id: -  alias: demo01  version: 1.0.0\n\
             created: 10/02/2025 14:00:00  updated: 11/02/2025 09:30:00\n"
        );
    }

    #[test]
    fn test_not_found_layout() {
        let model = RenderViewModel::NotFound {
            alias: "zzz999".to_string(),
            nodes: render_not_found("zzz999", "home"),
        };
        let text = RenderView::new(&model, Palette::plain()).to_string();

        assert_eq!(
            text,
            "# View not implemented yet\n\
             No screen is available for 'zzz999'.\n\
             -> Back to home (home)\n"
        );
    }
}
