use std::collections::HashSet;

use serde_json::Value;
use yew::prelude::*;

use common::admin::{DashboardStats, DocumentLink, EntityKind, NormalizedRecordList};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

pub struct AdminDashboard {
    pub partners: NormalizedRecordList,
    pub associates: NormalizedRecordList,
    pub consumers: NormalizedRecordList,
    /// Listings with a request outstanding.
    pub loading: HashSet<EntityKind>,
    pub tab: EntityKind,
    pub search: String,
    pub show_stats: bool,
    pub view_mode: ViewMode,
    /// Record shown in the detail sheet.
    pub selected: Option<(EntityKind, Value)>,
    /// Document shown in the viewer sheet.
    pub document: Option<DocumentLink>,
    pub document_loading: bool,
    pub logging_out: bool,
    pub details_ref: NodeRef,
    pub viewer_ref: NodeRef,
    pub loaded: bool,
}

impl AdminDashboard {
    pub fn new() -> Self {
        Self {
            partners: NormalizedRecordList::empty(EntityKind::Partners),
            associates: NormalizedRecordList::empty(EntityKind::Associates),
            consumers: NormalizedRecordList::empty(EntityKind::Consumers),
            loading: HashSet::new(),
            tab: EntityKind::Partners,
            search: String::new(),
            show_stats: true,
            view_mode: ViewMode::Grid,
            selected: None,
            document: None,
            document_loading: false,
            logging_out: false,
            details_ref: NodeRef::default(),
            viewer_ref: NodeRef::default(),
            loaded: false,
        }
    }

    pub fn list(&self, kind: EntityKind) -> &NormalizedRecordList {
        match kind {
            EntityKind::Partners => &self.partners,
            EntityKind::Associates => &self.associates,
            EntityKind::Consumers => &self.consumers,
        }
    }

    pub fn set_list(&mut self, list: NormalizedRecordList) {
        match list.kind() {
            EntityKind::Partners => self.partners = list,
            EntityKind::Associates => self.associates = list,
            EntityKind::Consumers => self.consumers = list,
        }
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.partners, &self.associates, &self.consumers)
    }

    /// Records of the current tab matching the search box.
    pub fn visible(&self) -> Vec<&Value> {
        common::admin::search::filter(self.list(self.tab).records(), &self.search)
    }
}
