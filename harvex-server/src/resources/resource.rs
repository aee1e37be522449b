use std::any::Any;
use std::fmt::Debug;

use harvex_types::explore::ExploreQuery;
use harvex_types::records::Record;
use harvex_types::registry::{Instance, MetadataFormat, Template};

pub trait Resource: Any + Send + Sync + Debug {}

impl Resource for ExploreQuery {}
impl Resource for Instance {}
impl Resource for MetadataFormat {}
impl Resource for Record {}
impl Resource for Template {}
