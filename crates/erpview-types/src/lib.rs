//! Data model of dynamic views: a screen described as a tree of typed
//! components bound to declarative queries over data sources, plus the
//! records the view configuration store keeps.

pub mod access;
pub mod aliases;
pub mod clock;
pub mod component;
pub mod data_source;
pub mod error;
pub mod query;
pub mod records;
pub mod validation;
pub mod view;

pub use access::{AccessDecision, Principal, authorize};
pub use aliases::{STATIC_VIEW_ALIASES, StaticAliases};
pub use clock::{Clock, SystemClock, iso_timestamp, parse_timestamp};
pub use component::{
    ButtonProps, ButtonSize, ButtonVariant, CardProps, ComponentBody, ComponentKind, DataBinding,
    FormField, FormProps, GenericProps, InputProps, Position, PropMap, TextColor, TextProps,
    TextVariant, ViewComponent,
};
pub use data_source::{Cardinality, ColumnDef, ColumnType, DataSource, DataSourceType, Relationship};
pub use error::{Error, Result};
pub use query::{
    Aggregation, FilterOperator, JoinKind, LogicalOperator, OrderBy, QueryBuilder, QueryField,
    QueryFilter, QueryJoin, SortDirection,
};
pub use records::{
    ComponentPath, DYNAMIC_PATH_PREFIX, DevelopmentStatus, DevelopmentViewPayload,
    DevelopmentViewRecord, NewPublishedView, PublishedStatus, PublishedViewRecord,
};
pub use validation::{MAX_NESTING_DEPTH, Severity, ValidationIssue, ValidationReport, validate};
pub use view::{
    DynamicViewConfig, INITIAL_VERSION, NARROW_GRID_COLS, ViewLayout, ViewMetadata,
    ViewRenderConfig, ViewType,
};
