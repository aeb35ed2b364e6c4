use yew::virtual_dom::AttrValue;

use crate::catalog::Collection;

#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub index: usize,
    pub url: AttrValue,
    pub alt: AttrValue,
}

pub fn thumbnails(collection: &Collection) -> impl Iterator<Item = Thumbnail> + Clone {
    let label = collection.label;
    collection
        .images
        .iter()
        .enumerate()
        .map(move |(index, url)| Thumbnail {
            index,
            url: AttrValue::Static(url),
            alt: AttrValue::from(format!("{} {}", label, index + 1)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{collections, find_or_first};

    #[test]
    fn alt_text_is_label_plus_one_based_index() {
        let show = find_or_first(collections(), "hitmen-scab").unwrap();
        let thumbs: Vec<_> = thumbnails(show).collect();
        assert_eq!(thumbs.len(), 5);
        assert_eq!(&*thumbs[0].alt, "HITMEN & SCAB SHOW 1");
        assert_eq!(&*thumbs[4].alt, "HITMEN & SCAB SHOW 5");
        assert_eq!(&*thumbs[2].url, show.images[2]);
    }

    #[test]
    fn sequence_can_be_restarted() {
        let show = find_or_first(collections(), "esdee-rico").unwrap();
        let thumbs = thumbnails(show);
        let first_pass: Vec<_> = thumbs.clone().map(|t| t.index).collect();
        let second_pass: Vec<_> = thumbs.map(|t| t.index).collect();
        assert_eq!(first_pass, (0..17).collect::<Vec<_>>());
        assert_eq!(first_pass, second_pass);
    }
}
