pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::issue_builder::*;

pub mod issue_builder {

    use super::*;
    use crate::{geo::*, id::*, issue::*, location::*};

    #[derive(Debug)]
    pub struct IssueBuild {
        issue: Issue,
    }

    impl IssueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.issue.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.issue.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.issue.description = desc.into();
            self
        }
        pub fn category(mut self, category: IssueCategory) -> Self {
            self.issue.category = category;
            self
        }
        pub fn status(mut self, status: IssueStatus) -> Self {
            self.issue.status = status;
            self
        }
        pub fn pos(mut self, pos: GeoPoint) -> Self {
            self.issue.location.pos = pos;
            self
        }
        pub fn address(mut self, address: Option<&str>) -> Self {
            self.issue.location.address = address.map(Into::into);
            self
        }
        pub fn photos(mut self, photos: Vec<impl Into<String>>) -> Self {
            self.issue.photos = photos.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn reporter(mut self, id: &str, name: &str) -> Self {
            self.issue.reporter_id = id.into();
            self.issue.reporter_name = name.into();
            self
        }
        pub fn finish(self) -> Issue {
            self.issue
        }
    }

    impl Builder for Issue {
        type Build = IssueBuild;
        fn build() -> IssueBuild {
            IssueBuild {
                issue: Issue {
                    id: Id::new(),
                    title: "".into(),
                    description: "".into(),
                    category: IssueCategory::Other,
                    status: IssueStatus::default(),
                    location: Location {
                        pos: GeoPoint::from_lat_lng_deg(0.0, 0.0),
                        address: None,
                    },
                    photos: vec![],
                    reporter_id: Id::new(),
                    reporter_name: "".into(),
                },
            }
        }
    }
}
