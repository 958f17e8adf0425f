pub const DEFAULT_BASE_URL: &str = "https://vinaterialosnogales.com";
pub const DEFAULT_IMAGE_DIR: &str = "images";
pub const DEFAULT_REPORT_PATH: &str = "reporte_no_encontrados.txt";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
pub const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_UPCS: &[&str] = &[
    "75026967",
    "7501064191886",
    "7501064120268",
    "75030575",
    "7501064115400",
    "7501064101205",
    "7501064113024",
    "75027278",
    "7501064103328",
    "7501064194139",
    "7501064193859",
    "7501064194146",
    "7501064196935",
    "7501064195013",
    "7501064195310",
    "7501064194214",
    "7501064191909",
    "7501064101465",
    "7501064101410",
    "75027285",
    "7501064197482",
    "7501064199110",
    "7501064199769",
    "7501064199271",
    "7501064199387",
    "7501064199615",
    "7503024460018",
    "7503024460179",
    "7503024460452",
    "7503024460155",
    "7503024460698",
    "7503024460070",
    "7503034941163",
    "7503024460889",
    "7503034941767",
    "7503034941361",
    "7503044233623",
    "7503044233852",
    "7503044233791",
    "7503044233760",
    "7503044233753",
    "7503052713285",
    "7503052713650",
    "7501064103100",
    "7501064194504",
    "7501064198168",
    "7501064198519",
    "7501064199141",
    "7503024460896",
    "7503044233210",
    "7501064112546",
    "7501064194962",
    "7501064107153",
];
