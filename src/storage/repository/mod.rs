pub mod assessment_repo;
pub mod descriptor_repo;
pub mod organization_repo;
pub mod reference_repo;
pub mod soft_delete_repo;

pub use assessment_repo::AssessmentRepository;
pub use descriptor_repo::DescriptorRepository;
pub use organization_repo::OrganizationRepository;
pub use reference_repo::ReferenceRepository;
pub use soft_delete_repo::SoftDeleteRepository;
