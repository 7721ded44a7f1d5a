use super::PrimeMeridianDef;

pub static PRIME_MERIDIANS: &[PrimeMeridianDef] = &[
    PrimeMeridianDef { id: "greenwich", defn: "0dE" },
    PrimeMeridianDef { id: "lisbon", defn: "9d07'54.862\"W" },
    PrimeMeridianDef { id: "paris", defn: "2d20'14.025\"E" },
    PrimeMeridianDef { id: "bogota", defn: "74d04'51.3\"W" },
    PrimeMeridianDef { id: "madrid", defn: "3d41'16.58\"W" },
    PrimeMeridianDef { id: "rome", defn: "12d27'8.4\"E" },
    PrimeMeridianDef { id: "bern", defn: "7d26'22.5\"E" },
    PrimeMeridianDef { id: "jakarta", defn: "106d48'27.79\"E" },
    PrimeMeridianDef { id: "ferro", defn: "17d40'W" },
    PrimeMeridianDef { id: "brussels", defn: "4d22'4.71\"E" },
    PrimeMeridianDef { id: "stockholm", defn: "18d3'29.8\"E" },
    PrimeMeridianDef { id: "athens", defn: "23d42'58.815\"E" },
    PrimeMeridianDef { id: "oslo", defn: "10d43'22.5\"E" },
];
