pub mod answers;
pub mod assignments;
pub mod descriptor;
pub mod fill;
pub mod i129f;
pub mod normalizer;
pub mod repository;
pub mod router;
pub mod service;
pub mod template;

pub use answers::{AnswersTree, Node};
pub use assignments::{FieldAssignments, FieldValue};
pub use descriptor::{DescriptorKind, FieldDescriptor, TextField};
pub use fill::{
    fill_form, FailedField, FieldWriteError, FillError, FillReport, FormFieldState, FormFiller,
    InMemoryForm,
};
pub use i129f::{FieldMapper, MappingOutcome};
pub use repository::{AnswersRepository, RepositoryError, UserId};
pub use router::forms_router;
pub use service::{FormService, FormServiceError};
pub use template::{FieldKind, TemplateError, TemplateInventory, TemplateProfile};
