// Static catalogue data: bahr patterns, their Urdu display names, the
// rukn (foot) table, and the Rubai and special (Hindi/Zamzama) families.
//
// Pattern alphabet: `=` long, `-` short, `/` foot separator, `+` caesura.
// Multiple rows may share one display name; those are the classical
// zihaf variants of the same bahr.

pub const METERS: &[(&str, &str)] = &[
    ("-===/-===/-===/-===", "ہزج مثمن سالم"),
    ("-===/-===/-===/-==", "ہزج مثمن محذوف"),
    ("-=-=/-=-=/-=-=/-=-=", "ہزج مثمن مقبوض"),
    ("=-=/-===+=-=/-===", "ہزج مثمن اشتر"),
    ("-=-=/-===/-=-=/-===", "ہزج مثمن مقبوض سالم"),
    ("==-/-==-/-==-/-===", "ہزج مثمن اخرب مکفوف سالم"),
    ("==-/-===+==-/-===", "ہزج مثمن اخرب سالم"),
    ("==-/-==-/-==-/-==", "ہزج مثمن اخرب مکفوف محذوف"),
    ("===/==-/-==-/-==", "ہزج مثمن اخرب مکفوف محذوف"),
    ("==-/-===/==-/-==", "ہزج مثمن اخرب مکفوف محذوف"),
    ("==-/-==-/-===/==", "ہزج مثمن اخرب مکفوف محذوف"),
    ("-===/-===/-===", "ہزج مسدس سالم"),
    ("-===/-===/-==", "ہزج مسدس محذوف"),
    ("==-/-=-=/-==", "ہزج مسدس اخرب مقبوض محذوف"),
    ("===/=-=/-==", "ہزج مسدس اخرم اشتر محذوف"),
    ("=-=/-=-=+=-=/-=-=", "ہزج مربع اشتر مقبوض مضاعف"),
    ("-===/-==", "ہزج مربع محذوف"),
    ("-===/-==+-===/-==", "ہزج مربع محذوف مضاعف"),
    ("==-=/==-=/==-=/==-=", "رجز مثمن سالم"),
    ("=--=/=--=/=--=/=--=", "رجز مثمن مطوی"),
    ("=--=/-=-=+=--=/-=-=", "رجز مثمن مطوی مخبون"),
    ("-=-=/=--=+-=-=/=--=", "رجز مثمن مخبون مطوی"),
    ("==-=/==-=/==-=", "رجز مسدس سالم"),
    ("=--=/=--=/=--=", "رجز مسدس مطوی"),
    ("=-==/=-==/=-==/=-==", "رمل مثمن سالم"),
    ("=-==/=-==/=-==/=-=", "رمل مثمن محذوف"),
    ("=-==/--==/--==/--=", "رمل مثمن سالم مخبون محذوف"),
    ("--==/--==/--==/--=", "رمل مثمن سالم مخبون محذوف"),
    ("=-==/--==/--==/==", "رمل مثمن مخبون محذوف مقطوع"),
    ("--==/--==/--==/==", "رمل مثمن مخبون محذوف مقطوع"),
    ("--=-/=-==+--=-/=-==", "رمل مثمن مشکول"),
    ("==-/=-==+==-/=-==", "رمل مثمن مشکول مسکّن"),
    ("--==/--==/--==/--==", "رمل مثمن مخبون"),
    ("=-==/=-==/=-==", "رمل مسدس سالم"),
    ("=-==/=-==/=-=", "رمل مسدس محذوف"),
    ("=-==/--==/--=", "رمل مسدس مخبون محذوف"),
    ("=-==/--==/==", "رمل مسدس مخبون محذوف مسکن"),
    ("--==/--==/--=", "رمل مسدس مخبون محذوف"),
    ("--==/--==/==", "رمل مسدس مخبون محذوف مسکن"),
    ("--==/--==/--==", "رمل مسدس مخبون"),
    ("-==/-==/-==/-==", "متقارب مثمن سالم"),
    ("-==/-==/-==/-==/-==/-==/-==/-==", "متقارب مثمن سالم مضاعف"),
    ("-==/-==/-==/-=", "متقارب مثمن محذوف"),
    ("=-/-=-/-=-/-==", "متقارب مثمن اثرم مقبوض"),
    ("=-/-=-/-=-/-=", "متقارب مثمن اثرم مقبوض محذوف"),
    ("=-/-=-/-=-/-=-/-=-/-=-/-=-/-=", "متقارب مثمن اثرم مقبوض مضاعف"),
    ("=-/-=-/-=-/-=-/-=-/-=-/-=-/-==", "متقارب مثمن اثرم مقبوض محذوف مضاعف"),
    ("-==/-==/-==", "متقارب مسدس سالم"),
    ("-==/-==/-=", "متقارب مسدس محذوف"),
    ("==/-==/==/-==", "متقارب مربع اثلم سالم مضاعف"),
    ("=-=/=-=/=-=/=-=", "متدارک مثمن سالم"),
    ("--=/--=/--=/--=", "متدارک مثمن مخبون"),
    ("--=/--=/--=/--=/--=/--=/--=/--=", "متدارک مثمن مخبون مضاعف"),
    ("=-=/=-=/=-=/--=", "متدارک مثمن سالم مقطوع"),
    ("=-=/=-=/=-=", "متدارک مسدس سالم"),
    ("=-=/-=/=-=/-=", "متدارک مربع مخلع مضاعف"),
    ("--=-=/--=-=/--=-=/--=-=", "کامل مثمن سالم"),
    ("--=-=/--=-=/--=-=", "کامل مسدس سالم"),
    ("-=--=/-=--=/-=--=/-=--=", "وافر مثمن سالم"),
    ("-=--=/-=--=/-=--=", "وافر مسدس سالم"),
    ("-=--=/-=--=/-==", "وافر مسدس مقطوف"),
    ("-===/=-==/-===/=-==", "مضارع مثمن سالم"),
    ("-==-/=-=-/-==-/=-=", "مضارع مثمن مکفوف محذوف"),
    ("==-/=-==/==-/=-==", "مضارع مثمن اخرب"),
    ("==-/=-=-/-==-/=-=", "مضارع مثمن اخرب مکفوف محذوف"),
    ("==-/=-==/==-/=-=", "مضارع مثمن اخرب محذوف"),
    ("==-/=-=-/-===", "مضارع مسدس اخرب مکفوف"),
    ("==-=/=-==/==-=/=-==", "مجتث مثمن سالم"),
    ("-=-=/--==/-=-=/--==", "مجتث مثمن مخبون"),
    ("-=-=/===/-=-=/--==", "مجتث مثمن مخبون"),
    ("-=-=/--==/-=-=/===", "مجتث مثمن مخبون"),
    ("-=-=/===/-=-=/===", "مجتث مثمن مخبون"),
    ("-=-=/--==/-=-=/--=", "مجتث مثمن مخبون محذوف"),
    ("-=-=/===/-=-=/--=", "مجتث مثمن مخبون محذوف"),
    ("-=-=/--==/-=-=/==", "مجتث مثمن مخبون محذوف مسکن"),
    ("-=-=/===/-=-=/==", "مجتث مثمن مخبون محذوف مسکن"),
    ("-=-=/--==/-=-=", "مجتث مسدس مخبون"),
    ("-=-=/===/-=-=", "مجتث مسدس مخبون"),
    ("==-=/===-/==-=/===-", "منسرح مثمن سالم"),
    ("=--=/=-=+=--=/=-=", "منسرح مثمن مطوی مکسوف"),
    ("=--=/=-=-/=--=/=", "منسرح مثمن مطوی منحور"),
    ("=--=/=-=/=--=", "منسرح مسدس مطوی مکسوف"),
    ("===-/==-=/===-/==-=", "مقتضب مثمن سالم"),
    ("=-=-/=--=/=-=-/=--=", "مقتضب مثمن مطوی"),
    ("==-=/==-=/===-", "سریع مسدس سالم"),
    ("=--=/=--=/=-=", "سریع مسدس مطوی مکسوف"),
    ("==-=/==-=/-==", "سریع مسدس مخبون مکسوف"),
    ("=-==/==-=/=-==/==-=", "خفیف مثمن سالم"),
    ("=-==/==-=/=-==", "خفیف مسدس سالم"),
    ("--==/-=-=/--==", "خفیف مسدس مخبون"),
    ("=-==/-=-=/--=", "خفیف مسدس مخبون محذوف"),
    ("--==/-=-=/--=", "خفیف مسدس مخبون محذوف"),
    ("=-==/-=-=/==", "خفیف مسدس مخبون محذوف مقطوع"),
    ("--==/-=-=/==", "خفیف مسدس مخبون محذوف مقطوع"),
    ("=-==/-=-=/=", "خفیف مسدس سالم مخبون محجوف"),
    ("--==/-=-=/=", "خفیف مسدس مخبون محجوف"),
    ("-===/-==/-===", "طویل مثمن سالم"),
    ("-==/-===/-==/-=-=", "طویل مثمن سالم مقبوض"),
    ("-==/-=-=/-==/-=-=", "طویل مثمن مقبوض"),
    ("=-==/=-=/=-==/=-=", "مدید مثمن سالم"),
    ("--==/--=/--==/--=", "مدید مثمن مخبون"),
    ("--==/==/--==/--=", "مدید مثمن مخبون"),
    ("===/--=/--==/--=", "مدید مثمن مخبون"),
    ("--==/--=/===/--=", "مدید مثمن مخبون"),
    ("--==/--=/--==/==", "مدید مثمن مخبون"),
    ("=-==/--=/=-==/--=", "مدید مثمن سالم مخبون"),
    ("==-=/=-=/==-=/=-=", "بسیط مثمن سالم"),
    ("-=-=/--=/-=-=/--=", "بسیط مثمن مخبون"),
    ("-===/-===/=-==", "قریب مسدس سالم"),
    ("==-/-==-/=-==", "قریب مسدس اخرب مکفوف"),
    ("=-==/=-==/==-=", "جدید مسدس سالم"),
    ("--==/--==/-=-=", "جدید مسدس مخبون"),
    ("=-==/-===/-===", "مشاکل مسدس سالم"),
    ("=-=-/-==-/-==", "مشاکل مسدس مکفوف محذوف"),
    ("-=-==/-=-==/-=-==/-=-==", "جمیل مثمن سالم"),
    ("=-=/-===", "ہزج مربع اشتر"),
    ("=-=/-=-=", "ہزج مربع اشتر مقبوض"),
    ("-===/-===", "ہزج مربع سالم"),
    ("-=-=/-=-=/-=-=/-=", "ہزج مثمن مقبوض محذوف"),
    ("=-==/--==/--==", "رمل مسدس مخبون"),
    ("-===/-===", "ہزج مربع سالم"),
    ("=-==/=-==", "رمل مربع سالم"),
    ("=-==/=-=", "ہزج مربع محذوف"),
    ("-==/-==", "متقارب مربع سالم"),
    ("--=-=/--=-=", "کامل مربع سالم"),
    ("-==/-===", "طویل مربع سالم"),
    ("=-==/=-=", "مدید مربع سالم"),
    ("-===/-===/-===/-===/-===/-===/-===/-===", "ہزج مثمن سالم مضاعف"),
    ("-=-==/-=-==", "جمیل مربع سالم"),
];

pub const FEET: &[(&str, &str)] = &[
    ("===", "مفعولن"),
    ("==-=", "مستفعلن"),
    ("==-", "مفعول"),
    ("==", "فِعْلن"),
    ("=-==", "فاعلاتن"),
    ("=-=-", "فاعلاتُ"),
    ("=-=", "فاعلن"),
    ("=--=", "مفتَعِلن"),
    ("=-", "فِعْل"),
    ("=", "فِع"),
    ("-===", "مفاعیلن"),
    ("-==-", "مفاعیل"),
    ("-==", "فعولن"),
    ("-=-=", "مفاعلن"),
    ("-=-", "فعول"),
    ("-=", "فَعَل"),
    ("--==", "فَعِلاتن"),
    ("--=-=", "متَفاعلن"),
    ("--=-", "فَعِلات"),
    ("--=", "فَعِلن"),
    ("-=-==", "مَفاعلاتن"),
    ("===-", "مفعولاتُ"),
    ("-=--=", "مفاعِلَتن"),
    ("==-=-", "مستفعلان"),
    ("=-==-", "فاعلاتان"),
    ("=--=-", "مفتَعِلان"),
    ("-===-", "مفاعیلان"),
    ("-=-=-", "مفاعلان"),
    ("--==-", "فَعِلاتان"),
    ("--=-=-", "متَفاعلان"),
    ("-=-==-", "مَفاعلاتان"),
    ("-=--=-", "مفاعِلَتان"),
];

pub const RUBAI_METERS: &[(&str, &str)] = &[
    ("==-/-==-/-==-/-=", "ہزج مثمّن اخرب مکفوف مجبوب"),
    ("==-/-==-/-===/=", "ہزج مثمّن اخرب مکفوف ابتر"),
    ("==-/-=-=/-===/=", "ہزج مثمّن اخرب مقبوض ابتر"),
    ("==-/-=-=/-==-/-=", "ہزج مثمّن اخرب مقبوض مکفوف مجبوب"),
    ("===/=-=/-==-/-=", "ہزج مثمّن اخرم اشتر مکفوف مجبوب"),
    ("===/=-=/-===/=", "ہزج مثمّن اخرم اشتر ابتر"),
    ("==-/-===/===/=", "ہزج مثمّن اخرب اخرم ابتر"),
    ("==-/-===/==-/-=", "ہزج مثمّن اخرب مجبوب"),
    ("===/===/==-/-=", "ہزج مثمّن اخرم اخرب مجبوب"),
    ("===/===/===/=", "ہزج مثمّن اخرم ابتر"),
    ("===/==-/-===/=", "ہزج مثمّن اخرم اخرب ابتر"),
    ("===/==-/-==-/-=", "ہزج مثمّن اخرم اخرب مکفوف مجبوب"),
];

pub const SPECIAL_METERS: &[(&str, &str, &str)] = &[
    ("=(=)/=(=)/=(=)/=(=)/=(=)/=(=)/=(=)/=", "بحرِ ہندی/ متقارب مثمن مضاعف", "فعلن فعلن فعلن فعلن فعلن فعلن فعلن فع"),
    ("=(=)/=(=)/=(=)/=(=)/=(=)/=", "بحرِ ہندی/ متقارب مسدس مضاعف", "فعلن فعلن فعلن فعلن فعلن فع"),
    ("=(=)/=(=)/=(=)/=(=)/=(=)/=(=)/=(=)/==", "بحرِ ہندی/ متقارب اثرم مقبوض محذوف مضاعف", "فعلن فعلن فعلن فعلن فعلن فعلن فعلن فعلن"),
    ("=(=)/=(=)/=(=)/=", "بحرِ ہندی/ متقارب مربع مضاعف", "فعلن فعلن فعلن فع"),
    ("=(=)/=(=)/=(=)/==", "بحرِ ہندی/ متقارب اثرم مقبوض محذوف", "فعلن فعلن فعلن فعلن"),
    ("=(=)/=(=)/=", "بحرِ ہندی/ متقارب مثمن محذوف", "فعلن فعلن فع"),
    ("=(=)/=(=)/=(=)/=(=)/=(=)/==", "بحرِ ہندی/ متقارب مسدس محذوف", "فعلن فعلن فعلن فعلن فعلن فعلن"),
    ("=(=)/=(=)", "بحرِ ہندی/ متقارب مربع محذوف", "فعلن فعلن"),
    ("(=)=/(=)=/(=)=/(=)=/(=)=/(=)=/(=)=/(=)=", "بحرِ زمزمہ/ متدارک مثمن مضاعف", "فعلن فعلن فعلن فعلن فعلن فعلن فعلن فعلن"),
    ("(=)=/(=)=/(=)=/(=)=/(=)=/(=)=", "بحرِ زمزمہ/ متدارک مسدس مضاعف", "فعلن فعلن فعلن فعلن فعلن فعلن"),
    ("(=)=/(=)=/(=)=/(=)", "بحرِ زمزمہ/ متدارک مربع مضاعف", "فعلن فعلن فعلن فعلن"),
];
