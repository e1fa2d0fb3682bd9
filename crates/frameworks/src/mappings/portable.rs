use std::sync::LazyLock;

use super::PortableFrameworkMappings;
use crate::Framework;
use crate::common::*;

/// The portable class library profiles that ship with the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPortableFrameworkMappings;

macro_rules! profiles {
    ($($number:literal: $($fw:ident),+;)*) => {
        vec![$(($number, vec![$($fw.clone()),+]),)*]
    };
}

static PROFILE_FRAMEWORKS: LazyLock<Vec<(u32, Vec<Framework>)>> = LazyLock::new(|| {
    profiles! {
        // v4.6
        31: WIN81, WP81;
        32: WIN81, WPA81;
        44: NET451, WIN81;
        84: WP81, WPA81;
        151: NET451, WIN81, WPA81;
        157: WIN81, WP81, WPA81;
        // v4.5
        7: NET45, WIN8;
        49: NET45, WP8;
        78: NET45, WIN8, WP8;
        111: NET45, WIN8, WPA81;
        259: NET45, WIN8, WPA81, WP8;
        // v4.0
        2: NET4, WIN8, SL4, WP7;
        3: NET4, SL4;
        4: NET45, SL4, WIN8, WP7;
        5: NET4, WIN8;
        6: NET403, WIN8;
        14: NET4, SL5;
        18: NET403, SL4;
        19: NET403, SL5;
        23: NET45, SL4;
        24: NET45, SL5;
        36: NET4, SL4, WIN8, WP8;
        37: NET4, SL5, WIN8;
        41: NET403, SL4, WIN8;
        42: NET403, SL5, WIN8;
        46: NET45, SL4, WIN8;
        47: NET45, SL5, WIN8;
        88: NET4, SL4, WIN8, WP75;
        92: NET4, WIN8, WPA81;
        95: NET403, SL4, WIN8, WP7;
        96: NET403, SL4, WIN8, WP75;
        102: NET403, WIN8, WPA81;
        104: NET45, SL4, WIN8, WP75;
        136: NET4, SL5, WIN8, WP8;
        143: NET403, SL4, WIN8, WP8;
        147: NET403, SL5, WIN8, WP8;
        154: NET45, SL4, WIN8, WP8;
        158: NET45, SL5, WIN8, WP8;
        225: NET4, SL5, WIN8, WPA81;
        240: NET403, SL5, WIN8, WPA81;
        255: NET45, SL5, WIN8, WPA81;
        328: NET4, SL5, WIN8, WPA81, WP8;
        336: NET403, SL5, WIN8, WPA81, WP8;
        344: NET45, SL5, WIN8, WPA81, WP8;
    }
});

/// Profiles that also run on the Mono and Xamarin platforms.
const XAMARIN_PROFILES: &[u32] = &[
    5, 6, 7, 14, 19, 24, 37, 42, 44, 47, 49, 78, 92, 102, 111, 136, 147, 151, 158, 225, 255, 259,
    328, 336, 344,
];

static PROFILE_OPTIONAL_FRAMEWORKS: LazyLock<Vec<(u32, Vec<Framework>)>> = LazyLock::new(|| {
    let xamarin: Vec<Framework> = [
        &MONOANDROID,
        &MONOTOUCH,
        &XAMARINIOS,
        &XAMARINMAC,
        &XAMARINPSTHREE,
        &XAMARINPSFOUR,
        &XAMARINPSVITA,
        &XAMARINWATCHOS,
        &XAMARINTVOS,
        &XAMARINXBOXTHREESIXTY,
        &XAMARINXBOXONE,
    ]
    .into_iter()
    .map(|fw| LazyLock::force(fw).clone())
    .collect();

    XAMARIN_PROFILES
        .iter()
        .map(|&number| (number, xamarin.clone()))
        .collect()
});

impl PortableFrameworkMappings for DefaultPortableFrameworkMappings {
    fn profile_frameworks(&self) -> &[(u32, Vec<Framework>)] {
        &PROFILE_FRAMEWORKS
    }

    fn profile_optional_frameworks(&self) -> &[(u32, Vec<Framework>)] {
        &PROFILE_OPTIONAL_FRAMEWORKS
    }
}
