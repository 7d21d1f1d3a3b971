use crate::context::Context;
use crate::geom::Rectangle;
use crate::view::View;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("route not found: {0:?}")]
    NotFound(String),
    #[error("no routes declared")]
    EmptyRouteList,
    #[error("duplicate route name: {0:?}")]
    DuplicateRoute(String),
}

/// Builds the screen for a route, given the screen rectangle.
pub type ScreenBuilder = Box<dyn Fn(Rectangle, &mut Context) -> Box<dyn View>>;

/// One declared route: a unique name and the screen it resolves to.
pub struct RouteDescriptor {
    pub name: String,
    pub builder: ScreenBuilder,
}

impl RouteDescriptor {
    pub fn new<F>(name: &str, builder: F) -> RouteDescriptor
    where
        F: Fn(Rectangle, &mut Context) -> Box<dyn View> + 'static,
    {
        RouteDescriptor {
            name: name.to_string(),
            builder: Box::new(builder),
        }
    }
}

/// Name → screen builder lookup, preserving declaration order.
///
/// The first declared route seeds the navigation stack unless an explicit
/// initial route is requested. Duplicate names are rejected at construction.
pub struct RouteTable {
    entries: IndexMap<String, ScreenBuilder, FxBuildHasher>,
}

impl RouteTable {
    pub fn from_descriptors(routes: Vec<RouteDescriptor>) -> Result<RouteTable, RouteError> {
        if routes.is_empty() {
            return Err(RouteError::EmptyRouteList);
        }

        let mut entries = IndexMap::with_capacity_and_hasher(routes.len(), FxBuildHasher::default());

        for route in routes {
            if entries.contains_key(&route.name) {
                return Err(RouteError::DuplicateRoute(route.name));
            }

            entries.insert(route.name, route.builder);
        }

        Ok(RouteTable { entries })
    }

    pub fn get(&self, name: &str) -> Option<&ScreenBuilder> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Name of the first declared route.
    pub fn first_name(&self) -> &str {
        self.entries
            .get_index(0)
            .map(|(name, _)| name.as_str())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SCREEN_CORAL;
    use crate::view::filler::Filler;

    fn descriptor(name: &str) -> RouteDescriptor {
        RouteDescriptor::new(name, |rect, _context| {
            Box::new(Filler::new(rect, SCREEN_CORAL)) as Box<dyn View>
        })
    }

    #[test]
    fn empty_declaration_list_is_rejected() {
        let result = RouteTable::from_descriptors(Vec::new());
        assert_eq!(result.err(), Some(RouteError::EmptyRouteList));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result =
            RouteTable::from_descriptors(vec![descriptor("home"), descriptor("home")]);
        assert_eq!(
            result.err(),
            Some(RouteError::DuplicateRoute("home".to_string()))
        );
    }

    #[test]
    fn declaration_order_is_preserved() {
        let table = RouteTable::from_descriptors(vec![
            descriptor("home"),
            descriptor("details"),
            descriptor("about"),
        ])
        .unwrap();

        assert_eq!(table.first_name(), "home");
        assert_eq!(table.len(), 3);
        assert!(table.contains("about"));
        assert!(!table.contains("settings"));
    }
}
