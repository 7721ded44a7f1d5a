use super::EllipsoidDef;
use super::EllipsoidShape::{Rf, B};

macro_rules! ellps {
    ($id:expr, $a:expr, $shape:expr, $name:expr) => {
        EllipsoidDef {
            id: $id,
            a: $a,
            shape: $shape,
            name: $name,
        }
    };
}

pub static ELLIPSOIDS: &[EllipsoidDef] = &[
    ellps!("MERIT", 6_378_137.0, Rf(298.257), "MERIT 1983"),
    ellps!("SGS85", 6_378_136.0, Rf(298.257), "Soviet Geodetic System 85"),
    ellps!("GRS80", 6_378_137.0, Rf(298.257_222_101), "GRS 1980(IUGG, 1980)"),
    ellps!("IAU76", 6_378_140.0, Rf(298.257), "IAU 1976"),
    ellps!("airy", 6_377_563.396, B(6_356_256.910), "Airy 1830"),
    ellps!("APL4.9", 6_378_137.0, Rf(298.25), "Appl. Physics. 1965"),
    ellps!("NWL9D", 6_378_145.0, Rf(298.25), "Naval Weapons Lab., 1965"),
    ellps!("mod_airy", 6_377_340.189, B(6_356_034.446), "Modified Airy"),
    ellps!("andrae", 6_377_104.43, Rf(300.0), "Andrae 1876 (Den., Iclnd.)"),
    ellps!("aust_SA", 6_378_160.0, Rf(298.25), "Australian Natl & S. Amer. 1969"),
    ellps!("GRS67", 6_378_160.0, Rf(298.247_167_427), "GRS 67(IUGG 1967)"),
    ellps!("bessel", 6_377_397.155, Rf(299.152_812_8), "Bessel 1841"),
    ellps!("bess_nam", 6_377_483.865, Rf(299.152_812_8), "Bessel 1841 (Namibia)"),
    ellps!("clrk66", 6_378_206.4, B(6_356_583.8), "Clarke 1866"),
    ellps!("clrk80", 6_378_249.145, Rf(293.4663), "Clarke 1880 mod."),
    ellps!("CPM", 6_375_738.7, Rf(334.29), "Comm. des Poids et Mesures 1799"),
    ellps!("delmbr", 6_376_428.0, Rf(311.5), "Delambre 1810 (Belgium)"),
    ellps!("engelis", 6_378_136.05, Rf(298.2566), "Engelis 1985"),
    ellps!("evrst30", 6_377_276.345, Rf(300.8017), "Everest 1830"),
    ellps!("evrst48", 6_377_304.063, Rf(300.8017), "Everest 1948"),
    ellps!("fschr60", 6_378_166.0, Rf(298.3), "Fischer (Mercury Datum) 1960"),
    ellps!("fschr68", 6_378_150.0, Rf(298.3), "Fischer 1968"),
    ellps!("helmert", 6_378_200.0, Rf(298.3), "Helmert 1906"),
    ellps!("hough", 6_378_270.0, Rf(297.0), "Hough"),
    ellps!("intl", 6_378_388.0, Rf(297.0), "International 1909 (Hayford)"),
    ellps!("krass", 6_378_245.0, Rf(298.3), "Krassovsky, 1942"),
    ellps!("kaula", 6_378_163.0, Rf(298.24), "Kaula 1961"),
    ellps!("lerch", 6_378_139.0, Rf(298.257), "Lerch 1979"),
    ellps!("mprts", 6_397_300.0, Rf(191.0), "Maupertius 1738"),
    ellps!("new_intl", 6_378_157.5, B(6_356_772.2), "New International 1967"),
    ellps!("plessis", 6_376_523.0, B(6_355_863.0), "Plessis 1817 (France)"),
    ellps!("SEasia", 6_378_155.0, B(6_356_773.3205), "Southeast Asia"),
    ellps!("walbeck", 6_376_896.0, B(6_355_834.8467), "Walbeck"),
    ellps!("WGS60", 6_378_165.0, Rf(298.3), "WGS 60"),
    ellps!("WGS66", 6_378_145.0, Rf(298.25), "WGS 66"),
    ellps!("WGS72", 6_378_135.0, Rf(298.26), "WGS 72"),
    ellps!("WGS84", 6_378_137.0, Rf(298.257_223_563), "WGS 84"),
    ellps!("sphere", 6_370_997.0, B(6_370_997.0), "Normal Sphere (r=6370997)"),
];
