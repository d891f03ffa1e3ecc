//! Host payloads built from descriptors.

use shelf_proto::{CollectionId, SectionDescriptor, SectionRegistration, SectionSettings};

/// Web client route to a collection's detail page.
pub fn details_route(id: &CollectionId) -> String {
    format!("/web/index.html#!/details?id={id}")
}

/// Registration payload for one descriptor. The collection id travels as
/// the additional data the host echoes back when it asks for items.
pub fn registration_for(descriptor: &SectionDescriptor) -> SectionRegistration {
    SectionRegistration::new(
        descriptor.section_id.clone(),
        descriptor.collection_name.clone(),
        details_route(&descriptor.collection_id),
        descriptor.collection_id.clone(),
        descriptor.view_mode,
    )
}

/// Persisted settings entry for one descriptor.
pub fn settings_for(descriptor: &SectionDescriptor) -> SectionSettings {
    SectionSettings::new(descriptor.section_id.clone(), descriptor.view_mode)
}
