pub mod content;
pub mod error;
pub mod features;
pub mod mapping;
pub mod report;
pub mod semantic;
pub mod subscription;
pub mod table;

pub use content::{ContentBlock, EditHistory, Section, SectionList, TextStyle};
pub use error::{ModelError, Result};
pub use features::{ChartCategory, ChartType, ExportFormat, Feature, TemplateId};
pub use mapping::{ColumnDescriptor, ColumnMapping, MappedColumn, MappingOrigin};
pub use report::{ValidationMetrics, ValidationReport};
pub use semantic::SemanticType;
pub use subscription::{FREE_GENERATION_LIMIT, SubscriptionTier, UserSubscription};
pub use table::{RawTable, is_missing};
