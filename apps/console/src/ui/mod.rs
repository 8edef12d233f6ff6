pub mod breadcrumb;
pub mod opportunities;
pub mod stage_edit;
