mod content;
mod node;

pub use content::Content;
pub use node::{Direction, Element};

/// Find an element by id anywhere in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Ids from `root` down to the element with `id`, both ends included.
///
/// Returns `None` when no element in the tree carries `id`.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    if root.id == id {
        return Some(vec![root.id.clone()]);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(mut path) = path_to(child, id) {
                path.insert(0, root.id.clone());
                return Some(path);
            }
        }
    }

    None
}
