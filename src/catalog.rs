use std::collections::HashSet;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    pub key: &'static str,
    pub label: &'static str,
    pub location: &'static str,
    pub images: &'static [&'static str],
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog has no collections")]
    Empty,
    #[error("collection key `{0}` is used more than once")]
    DuplicateKey(String),
    #[error("collection `{0}` has no images")]
    NoImages(String),
    #[error("collection `{key}` has an unparseable image url `{url}`: {reason}")]
    InvalidUrl {
        key: String,
        url: String,
        reason: url::ParseError,
    },
    #[error("collection `{key}` has a non-https image url `{url}`")]
    NotHttps { key: String, url: String },
}

const HITMEN_SCAB: &[&str] = &[
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769550784/DSCF3224_oybxjn.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769550803/DSCF3273_ikocvm.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769550802/DSCF3272_tm4vhb.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769550802/DSCF3274_jzhmk9.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769550797/DSCF3270_b5a0f5.jpg",
];

const ESDEE_RICO: &[&str] = &[
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552200/DSCF3059_qczxzw.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552200/DSCF3074_l3zc4d.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552200/DSCF3039_w5zxgg.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552200/DSCF3053_jmuesa.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552199/DSCF3032_vrtud6.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552198/DSCF3019_mvzleu.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552197/DSCF3002_pgfmcb.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552197/DSCF3013_v61lal.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552197/DSCF2983_kcyd7g.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552197/DSCF2937_g8l1wg.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552197/DSCF2959_hh9f3a.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552197/DSCF2958_stqszv.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552197/DSCF2955_dwisja.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552197/DSCF2946_usig6u.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552197/DSCF2939_yjlogh.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769552196/DSCF2936_sbdkoo.jpg",
    "https://res.cloudinary.com/dlnswhjm2/image/upload/v1769551547/DSCF2937_ivwbee.jpg",
];

static COLLECTIONS: &[Collection] = &[
    Collection {
        key: "hitmen-scab",
        label: "HITMEN & SCAB SHOW",
        location: "Portsmouth · 2025",
        images: HITMEN_SCAB,
    },
    Collection {
        key: "esdee-rico",
        label: "ESDEE & RICO ACE — HEADLINER",
        location: "London · 2025",
        images: ESDEE_RICO,
    },
];

pub fn collections() -> &'static [Collection] {
    COLLECTIONS
}

/// Looks `key` up in `collections`, falling back to the first entry when
/// nothing matches. Returns `None` only for an empty slice.
pub fn find_or_first<'a>(collections: &'a [Collection], key: &str) -> Option<&'a Collection> {
    match collections.iter().find(|c| c.key == key) {
        Some(found) => Some(found),
        None => {
            log::debug!("Unknown collection key {:?}, showing the first collection", key);
            collections.first()
        }
    }
}

pub fn validate(collections: &[Collection]) -> Result<(), CatalogError> {
    if collections.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for collection in collections {
        if !seen.insert(collection.key) {
            return Err(CatalogError::DuplicateKey(collection.key.to_string()));
        }
        if collection.images.is_empty() {
            return Err(CatalogError::NoImages(collection.key.to_string()));
        }
        for image in collection.images {
            let parsed = Url::parse(image).map_err(|reason| CatalogError::InvalidUrl {
                key: collection.key.to_string(),
                url: image.to_string(),
                reason,
            })?;
            if parsed.scheme() != "https" || parsed.host_str().is_none() {
                return Err(CatalogError::NotHttps {
                    key: collection.key.to_string(),
                    url: image.to_string(),
                });
            }
        }
    }
    Ok(())
}
