// src/marketplace/plugin.rs
use bevy::prelude::*;

use super::events::*;
use super::resources::{
    ProductDirectory, ReferenceData, ServiceDirectory, StoreDirectory, UserDirectory,
};
use super::systems;
use crate::ui::systems::forward_events;

/// Ordering within a frame: UI-written requests are dispatched to background
/// tasks, finished tasks are forwarded as events, and the results are folded
/// into the directories.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum MarketplaceSystemSet {
    DispatchRequests,
    DeliverResults,
    ApplyResults,
}

pub struct MarketplacePlugin;

impl Plugin for MarketplacePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                MarketplaceSystemSet::DispatchRequests,
                MarketplaceSystemSet::DeliverResults.after(MarketplaceSystemSet::DispatchRequests),
                MarketplaceSystemSet::ApplyResults.after(MarketplaceSystemSet::DeliverResults),
            ),
        );

        app.init_resource::<ProductDirectory>()
            .init_resource::<StoreDirectory>()
            .init_resource::<ServiceDirectory>()
            .init_resource::<UserDirectory>()
            .init_resource::<ReferenceData>();

        app.add_event::<OperationFeedback>()
            .add_event::<RequestLoadProducts>()
            .add_event::<RequestLoadProductDetail>()
            .add_event::<RequestSaveProduct>()
            .add_event::<RequestDeleteProduct>()
            .add_event::<ProductsLoaded>()
            .add_event::<ProductDetailLoaded>()
            .add_event::<ProductSaved>()
            .add_event::<ProductDeleted>()
            .add_event::<RequestLoadStores>()
            .add_event::<RequestLoadStoreDetail>()
            .add_event::<RequestSaveStore>()
            .add_event::<RequestDeleteStore>()
            .add_event::<StoresLoaded>()
            .add_event::<StoreDetailLoaded>()
            .add_event::<StoreSaved>()
            .add_event::<StoreDeleted>()
            .add_event::<RequestLoadServices>()
            .add_event::<RequestLoadServiceDetail>()
            .add_event::<RequestSaveService>()
            .add_event::<RequestDeleteService>()
            .add_event::<RequestDeleteServiceDetailRow>()
            .add_event::<RequestDeleteServiceStepRow>()
            .add_event::<ServicesLoaded>()
            .add_event::<ServiceDetailLoaded>()
            .add_event::<ServiceSaved>()
            .add_event::<ServiceDeleted>()
            .add_event::<ServiceRowDeleted>()
            .add_event::<RequestLoadUsers>()
            .add_event::<RequestLoadUserDetail>()
            .add_event::<RequestCreateUser>()
            .add_event::<UsersLoaded>()
            .add_event::<UserDetailLoaded>()
            .add_event::<UserCreated>()
            .add_event::<RequestLoadServiceCategories>()
            .add_event::<RequestLoadStoreChoices>()
            .add_event::<ServiceCategoriesLoaded>()
            .add_event::<StoreChoicesLoaded>()
            .add_event::<RequestUploadImage>()
            .add_event::<ImageUploaded>();

        app.add_systems(
            Update,
            (
                systems::products::handle_product_requests,
                systems::stores::handle_store_requests,
                systems::services::handle_service_requests,
                systems::users::handle_user_requests,
                systems::reference::handle_reference_requests,
                systems::upload::handle_upload_requests,
            )
                .in_set(MarketplaceSystemSet::DispatchRequests),
        );

        app.add_systems(
            Update,
            (
                forward_events::<ProductsLoaded>,
                forward_events::<ProductDetailLoaded>,
                forward_events::<ProductSaved>,
                forward_events::<ProductDeleted>,
                forward_events::<StoresLoaded>,
                forward_events::<StoreDetailLoaded>,
                forward_events::<StoreSaved>,
                forward_events::<StoreDeleted>,
            )
                .in_set(MarketplaceSystemSet::DeliverResults),
        );
        app.add_systems(
            Update,
            (
                forward_events::<ServicesLoaded>,
                forward_events::<ServiceDetailLoaded>,
                forward_events::<ServiceSaved>,
                forward_events::<ServiceDeleted>,
                forward_events::<ServiceRowDeleted>,
                forward_events::<UsersLoaded>,
                forward_events::<UserDetailLoaded>,
                forward_events::<UserCreated>,
                forward_events::<ServiceCategoriesLoaded>,
                forward_events::<StoreChoicesLoaded>,
                forward_events::<ImageUploaded>,
            )
                .in_set(MarketplaceSystemSet::DeliverResults),
        );

        app.add_systems(
            Update,
            (
                systems::products::apply_product_results,
                systems::stores::apply_store_results,
                systems::services::apply_service_results,
                systems::users::apply_user_results,
                systems::reference::apply_reference_results,
                systems::upload::apply_upload_results,
            )
                .in_set(MarketplaceSystemSet::ApplyResults),
        );

        info!("MarketplacePlugin initialized.");
    }
}
