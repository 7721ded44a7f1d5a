use super::DatumDef;

pub static DATUMS: &[DatumDef] = &[
    DatumDef {
        id: "WGS84",
        ellipse_id: "WGS84",
        defn: "towgs84=0,0,0",
        comments: "",
    },
    DatumDef {
        id: "GGRS87",
        ellipse_id: "GRS80",
        defn: "towgs84=-199.87,74.79,246.62",
        comments: "Greek_Geodetic_Reference_System_1987",
    },
    DatumDef {
        id: "NAD83",
        ellipse_id: "GRS80",
        defn: "towgs84=0,0,0",
        comments: "North_American_Datum_1983",
    },
    DatumDef {
        id: "potsdam",
        ellipse_id: "bessel",
        defn: "towgs84=606.0,23.0,413.0",
        comments: "Potsdam Rauenberg 1950 DHDN",
    },
    DatumDef {
        id: "carthage",
        ellipse_id: "clrk80",
        defn: "towgs84=-263.0,6.0,431.0",
        comments: "Carthage 1934 Tunisia",
    },
    DatumDef {
        id: "hermannskogel",
        ellipse_id: "bessel",
        defn: "towgs84=653.0,-212.0,449.0",
        comments: "Hermannskogel",
    },
    DatumDef {
        id: "ire65",
        ellipse_id: "mod_airy",
        defn: "towgs84=482.530,-130.596,564.557,-1.042,-0.214,-0.631,8.15",
        comments: "Ireland 1965",
    },
    DatumDef {
        id: "nzgd49",
        ellipse_id: "intl",
        defn: "towgs84=59.47,-5.04,187.44,0.47,-0.1,1.024,-4.5993",
        comments: "New Zealand Geodetic Datum 1949",
    },
    DatumDef {
        id: "OSGB36",
        ellipse_id: "airy",
        defn: "towgs84=446.448,-125.157,542.060,0.1502,0.2470,0.8421,-20.4894",
        comments: "Airy 1830",
    },
];
