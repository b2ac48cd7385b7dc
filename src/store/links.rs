//! Navigation and footer link store

use std::collections::HashSet;

use tracing::info;

use crate::database::Storage;
use crate::model::{Link, LinkPatch, LinkType, NewLink};
use crate::seed;
use crate::store::collection::{Collection, Record};

pub const SLOT_LINKS: &str = "admin-links";

impl Record for Link {
    const SLOT: &'static str = SLOT_LINKS;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::links()
    }
}

#[derive(Clone)]
pub struct Links {
    collection: Collection<Link>,
}

impl Links {
    pub fn new(storage: Storage) -> Self {
        Self {
            collection: Collection::new(storage),
        }
    }

    pub fn all(&self) -> Vec<Link> {
        self.collection.all()
    }

    pub fn save(&self, links: &[Link]) {
        self.collection.save(links)
    }

    pub fn get(&self, id: &str) -> Option<Link> {
        self.collection.get(id)
    }

    /// Adds a link, placing it after every existing link unless an order is given
    pub fn add(&self, link: NewLink) -> Link {
        let next_order = self
            .all()
            .iter()
            .map(Link::sort_key)
            .max()
            .unwrap_or(0)
            + 1;

        let link = Link {
            id: self.collection.next_id(),
            label: link.label,
            url: link.url,
            kind: link.kind,
            category_key: link.category_key,
            order: Some(link.order.filter(|&o| o != 0).unwrap_or(next_order)),
        };
        self.collection.insert(link)
    }

    pub fn update(&self, id: &str, patch: &LinkPatch) -> Option<Link> {
        self.collection.update(id, patch)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.collection.delete(id)
    }

    /// Links of one kind in display order
    pub fn by_type(&self, kind: LinkType) -> Vec<Link> {
        let mut links: Vec<Link> = self
            .all()
            .into_iter()
            .filter(|l| l.kind == kind)
            .collect();
        links.sort_by_key(Link::sort_key);
        links
    }

    /// Category menu entries shown under the header
    pub fn category_links(&self) -> Vec<Link> {
        self.by_type(LinkType::Category)
    }

    /// Restores any default link that is missing by id
    ///
    /// Returns how many links were added; the slot is only written when that
    /// is non-zero.
    pub fn ensure_defaults(&self) -> usize {
        let mut links = self.all();
        let present: HashSet<String> = links.iter().map(|l| l.id.clone()).collect();

        let missing: Vec<Link> = seed::links()
            .into_iter()
            .filter(|l| !present.contains(&l.id))
            .collect();
        let added = missing.len();

        if added > 0 {
            links.extend(missing);
            self.save(&links);
            info!(added, "restored default links");
        }
        added
    }
}
