use super::ProjectionTypeDef;

pub static PROJECTION_TYPES: &[ProjectionTypeDef] = &[
    ProjectionTypeDef { id: "longlat", descr: "Lat/long (Geodetic alias)\n\t" },
    ProjectionTypeDef { id: "latlong", descr: "Lat/long (Geodetic alias)\n\t" },
    ProjectionTypeDef { id: "lonlat", descr: "Lat/long (Geodetic)\n\t" },
    ProjectionTypeDef { id: "latlon", descr: "Lat/long (Geodetic alias)\n\t" },
    ProjectionTypeDef { id: "geocent", descr: "Geocentric\n\t" },
    ProjectionTypeDef { id: "merc", descr: "Mercator\n\tCyl, Sph&Ell\n\tlat_ts=" },
    ProjectionTypeDef { id: "webmerc", descr: "Web Mercator / Pseudo Mercator\n\tCyl, Ell\n\t" },
    ProjectionTypeDef { id: "tmerc", descr: "Transverse Mercator\n\tCyl, Sph&Ell" },
    ProjectionTypeDef { id: "utm", descr: "Universal Transverse Mercator (UTM)\n\tCyl, Sph\n\tzone= south" },
    ProjectionTypeDef {
        id: "lcc",
        descr: "Lambert Conformal Conic\n\tConic, Sph&Ell\n\tlat_1= and lat_2= or lat_0, k_0=",
    },
    ProjectionTypeDef { id: "aea", descr: "Albers Equal Area\n\tConic Sph&Ell\n\tlat_1= lat_2=" },
    ProjectionTypeDef {
        id: "eqc",
        descr: "Equidistant Cylindrical (Plate Carree)\n\tCyl, Sph\n\tlat_ts=[, lat_0=0]",
    },
    ProjectionTypeDef { id: "sinu", descr: "Sinusoidal (Sanson-Flamsteed)\n\tPCyl, Sph&Ell" },
    ProjectionTypeDef { id: "stere", descr: "Stereographic\n\tAzi, Sph&Ell\n\tlat_ts=" },
    ProjectionTypeDef { id: "sterea", descr: "Oblique Stereographic Alternative\n\tAzimuthal, Sph&Ell" },
    ProjectionTypeDef { id: "apian", descr: "Apian Globular I\n\tMisc Sph, no inv" },
    ProjectionTypeDef { id: "bacon", descr: "Bacon Globular\n\tMisc Sph, no inv" },
    ProjectionTypeDef { id: "ortel", descr: "Ortelius Oval\n\tMisc Sph, no inv" },
];
