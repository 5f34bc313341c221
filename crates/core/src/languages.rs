use crate::provider::ProviderId;

const YOUDAO: &[(&str, &str)] = &[
    ("zh-CHS", "简体中文"),
    ("zh-CHT", "繁体中文"),
    ("en", "英文"),
    ("ja", "日文"),
    ("ko", "韩文"),
    ("fr", "法文"),
    ("es", "西班牙文"),
    ("pt", "葡萄牙文"),
    ("it", "意大利文"),
    ("ru", "俄文"),
    ("vi", "越南文"),
    ("de", "德文"),
    ("ar", "阿拉伯文"),
    ("id", "印尼文"),
    ("af", "南非荷兰语"),
    ("bs", "波斯尼亚语"),
    ("bg", "保加利亚语"),
    ("yue", "中文粤语"),
    ("ca", "加泰隆语"),
    ("hr", "克罗地亚语"),
    ("cs", "捷克语"),
    ("da", "丹麦语"),
    ("nl", "荷兰语"),
    ("et", "爱沙尼亚语"),
    ("fj", "斐济语"),
    ("fi", "芬兰语"),
    ("el", "希腊语"),
    ("ht", "海地克里奥尔语"),
    ("he", "希伯来语"),
    ("hi", "印地语"),
    ("mww", "白苗语"),
    ("hu", "匈牙利语"),
    ("sw", "斯瓦希里语"),
    ("tlh", "克林贡语"),
    ("lv", "拉脱维亚语"),
    ("lt", "立陶宛语"),
    ("ms", "马来语"),
    ("mt", "马耳他语"),
    ("no", "挪威语"),
    ("fa", "波斯语"),
    ("pl", "波兰语"),
    ("otq", "克雷塔罗奥托米语"),
    ("ro", "罗马尼亚语"),
    ("sr-Cyrl", "塞尔维亚语(西里尔文)"),
    ("sr-Latn", "塞尔维亚语(拉丁文)"),
    ("sk", "斯洛伐克语"),
    ("sl", "斯洛文尼亚语"),
    ("sv", "瑞典语"),
    ("ty", "塔希提语"),
    ("th", "泰语"),
    ("to", "汤加语"),
    ("tr", "土耳其语"),
    ("uk", "乌克兰语"),
    ("ur", "乌尔都语"),
    ("cy", "威尔士语"),
    ("yua", "尤卡坦玛雅语"),
    ("sq", "阿尔巴尼亚语"),
    ("am", "阿姆哈拉语"),
    ("hy", "亚美尼亚语"),
    ("az", "阿塞拜疆语"),
    ("bn", "孟加拉语"),
    ("eu", "巴斯克语"),
    ("be", "白俄罗斯语"),
    ("ceb", "宿务语"),
    ("co", "科西嘉语"),
    ("eo", "世界语"),
    ("tl", "菲律宾语"),
    ("fy", "弗里西语"),
    ("gl", "加利西亚语"),
    ("ka", "格鲁吉亚语"),
    ("gu", "古吉拉特语"),
    ("ha", "豪萨语"),
    ("haw", "夏威夷语"),
    ("is", "冰岛语"),
    ("ig", "伊博语"),
    ("ga", "爱尔兰语"),
    ("jw", "爪哇语"),
    ("kn", "卡纳达语"),
    ("kk", "哈萨克语"),
    ("km", "高棉语"),
    ("ku", "库尔德语"),
    ("ky", "柯尔克孜语"),
    ("lo", "老挝语"),
    ("la", "拉丁语"),
    ("lb", "卢森堡语"),
    ("mk", "马其顿语"),
    ("mg", "马尔加什语"),
    ("ml", "马拉雅拉姆语"),
    ("mi", "毛利语"),
    ("mr", "马拉地语"),
    ("mn", "蒙古语"),
    ("my", "缅甸语"),
    ("ne", "尼泊尔语"),
    ("ny", "齐切瓦语"),
    ("ps", "普什图语"),
    ("pa", "旁遮普语"),
    ("sm", "萨摩亚语"),
    ("gd", "苏格兰盖尔语"),
    ("st", "塞索托语"),
    ("sn", "修纳语"),
    ("sd", "信德语"),
    ("si", "僧伽罗语"),
    ("so", "索马里语"),
    ("su", "巽他语"),
    ("tg", "塔吉克语"),
    ("ta", "泰米尔语"),
    ("te", "泰卢固语"),
    ("uz", "乌兹别克语"),
    ("xh", "南非科萨语"),
    ("yi", "意第绪语"),
    ("yo", "约鲁巴语"),
    ("zu", "南非祖鲁语"),
    ("auto", "自动识别"),
];

const MICROSOFT: &[(&str, &str)] = &[
    ("af", "南非荷兰语"),
    ("sq", "阿尔巴尼亚语"),
    ("am", "阿姆哈拉语"),
    ("ar", "阿拉伯语"),
    ("hy", "亚美尼亚语"),
    ("as", "阿萨姆语"),
    ("az", "阿塞拜疆语(拉丁语)"),
    ("bn", "Bangla"),
    ("ba", "巴什基尔语"),
    ("eu", "巴斯克语"),
    ("bs", "波斯尼亚语(拉丁语系)"),
    ("bg", "保加利亚语"),
    ("yue", "中文粤语"),
    ("ca", "加泰罗尼亚语"),
    ("lzh", "中文文学"),
    ("zh-Hans", "简体中文"),
    ("zh-Hant", "繁体中文"),
    ("hr", "克罗地亚语"),
    ("cs", "捷克语"),
    ("da", "丹麦语"),
    ("prs", "达里语"),
    ("dv", "马尔代夫语"),
    ("nl", "荷兰语"),
    ("en", "英语"),
    ("et", "爱沙尼亚语"),
    ("fo", "法罗语"),
    ("fj", "斐济语"),
    ("fil", "菲律宾语"),
    ("fi", "芬兰语"),
    ("fr", "法语"),
    ("fr-ca", "法语（加拿大）"),
    ("gl", "加利西亚语"),
    ("ka", "格鲁吉亚语"),
    ("de", "德语"),
    ("el", "希腊语"),
    ("gu", "古吉拉特语"),
    ("ht", "海地克里奥尔语"),
    ("he", "希伯来语"),
    ("hi", "Hindi"),
    ("mww", "白苗语（拉丁语）"),
    ("hu", "匈牙利语"),
    ("is", "冰岛语"),
    ("id", "印度尼西亚语"),
    ("ikt", "因纽纳敦语"),
    ("iu", "因纽特语"),
    ("iu-Latn", "因纽特语(拉丁语)"),
    ("ga", "爱尔兰语"),
    ("it", "意大利语"),
    ("ja", "日语"),
    ("kn", "卡纳达语"),
    ("kk", "哈萨克语"),
    ("km", "高棉语"),
    ("tlh-Latn", "克林贡语"),
    ("tlh-Piqd", "克林贡语(plqaD)"),
    ("ko", "韩语"),
    ("ku", "库尔德语(中部)"),
    ("kmr", "库尔德语(北部)"),
    ("ky", "吉尔吉斯语(西里尔语)"),
    ("lo", "老挝语"),
    ("lv", "拉脱维亚语"),
    ("lt", "立陶宛语"),
    ("mk", "马其顿语"),
    ("mg", "马达加斯加语"),
    ("ms", "马来语(拉丁语系)"),
    ("ml", "马拉雅拉姆语"),
    ("mt", "马耳他语"),
    ("mi", "毛利语"),
    ("mr", "马拉地语"),
    ("mn-Cyrl", "蒙古语(西里尔文)"),
    ("mn-Mong", "蒙古语(传统)"),
    ("my", "缅甸"),
    ("ne", "尼泊尔语"),
    ("nb", "挪威语"),
    ("or", "奥里亚语"),
    ("ps", "普什图语"),
    ("fa", "波斯语"),
    ("pl", "波兰语"),
    ("pt", "葡萄牙语（巴西）"),
    ("pt-pt", "葡萄牙语(葡萄牙)"),
    ("pa", "旁遮普语"),
    ("otq", "克雷塔罗奥托米语"),
    ("ro", "罗马尼亚语"),
    ("ru", "俄语"),
    ("sm", "萨摩亚语(拉丁语)"),
    ("sr-Cyrl", "塞尔维亚语（西里尔）"),
    ("sr-Latn", "塞尔维亚语（拉丁）"),
    ("sk", "斯洛伐克语"),
    ("sl", "斯洛文尼亚语"),
    ("so", "索马里语（阿拉伯语）"),
    ("es", "西班牙语"),
    ("sw", "斯瓦希里语（拉丁语）"),
    ("sv", "瑞典语"),
    ("ty", "塔希提语"),
    ("ta", "泰米尔语"),
    ("tt", "鞑靼语（拉丁语）"),
    ("te", "泰卢固语"),
    ("th", "泰语"),
    ("bo", "藏语"),
    ("ti", "提格里尼亚语"),
    ("to", "汤加语"),
    ("tr", "土耳其语"),
    ("tk", "土库曼语(拉丁语)"),
    ("uk", "乌克兰语"),
    ("hsb", "上索布语"),
    ("ur", "乌尔都语"),
    ("ug", "维吾尔语（阿拉伯语）"),
    ("uz", "乌兹别克语(拉丁语)"),
    ("vi", "越南语"),
    ("cy", "威尔士语"),
    ("yua", "尤卡坦玛雅语"),
    ("zu", "祖鲁语"),
];

const BAIDU: &[(&str, &str)] = &[
    ("ara", "阿拉伯语"),
    ("gle", "爱尔兰语"),
    ("oci", "奥克语"),
    ("alb", "阿尔巴尼亚语"),
    ("arq", "阿尔及利亚阿拉伯语"),
    ("aka", "阿肯语"),
    ("arg", "阿拉贡语"),
    ("amh", "阿姆哈拉语"),
    ("asm", "阿萨姆语"),
    ("aym", "艾马拉语"),
    ("aze", "阿塞拜疆语"),
    ("ast", "阿斯图里亚斯语"),
    ("oss", "奥塞梯语"),
    ("est", "爱沙尼亚语"),
    ("oji", "奥杰布瓦语"),
    ("ori", "奥里亚语"),
    ("orm", "奥罗莫语"),
    ("pl", "波兰语"),
    ("per", "波斯语"),
    ("bre", "布列塔尼语"),
    ("bak", "巴什基尔语"),
    ("baq", "巴斯克语"),
    ("pot", "巴西葡萄牙语"),
    ("bel", "白俄罗斯语"),
    ("ber", "柏柏尔语"),
    ("pam", "邦板牙语"),
    ("bul", "保加利亚语"),
    ("sme", "北方萨米语"),
    ("ped", "北索托语"),
    ("bem", "本巴语"),
    ("bli", "比林语"),
    ("bis", "比斯拉马语"),
    ("bal", "俾路支语"),
    ("ice", "冰岛语"),
    ("bos", "波斯尼亚语"),
    ("bho", "博杰普尔语"),
    ("chv", "楚瓦什语"),
    ("tso", "聪加语"),
    ("dan", "丹麦语"),
    ("de", "德语"),
    ("tat", "鞑靼语"),
    ("sha", "掸语"),
    ("tet", "德顿语"),
    ("div", "迪维希语"),
    ("log", "低地德语"),
    ("ru", "俄语"),
    ("fra", "法语"),
    ("fil", "菲律宾语"),
    ("fin", "芬兰语"),
    ("san", "梵语"),
    ("fri", "弗留利语"),
    ("ful", "富拉尼语"),
    ("fao", "法罗语"),
    ("gla", "盖尔语"),
    ("kon", "刚果语"),
    ("ups", "高地索布语"),
    ("hkm", "高棉语"),
    ("kal", "格陵兰语"),
    ("geo", "格鲁吉亚语"),
    ("guj", "古吉拉特语"),
    ("gra", "古希腊语"),
    ("eno", "古英语"),
    ("grn", "瓜拉尼语"),
    ("kor", "韩语"),
    ("nl", "荷兰语"),
    ("hup", "胡帕语"),
    ("hak", "哈卡钦语"),
    ("ht", "海地语"),
    ("mot", "黑山语"),
    ("hau", "豪萨语"),
    ("kir", "吉尔吉斯语"),
    ("glg", "加利西亚语"),
    ("frn", "加拿大法语"),
    ("cat", "加泰罗尼亚语"),
    ("cs", "捷克语"),
    ("kab", "卡拜尔语"),
    ("kan", "卡纳达语"),
    ("kau", "卡努里语"),
    ("kah", "卡舒比语"),
    ("cor", "康瓦尔语"),
    ("xho", "科萨语"),
    ("cos", "科西嘉语"),
    ("cre", "克里克语"),
    ("cri", "克里米亚鞑靼语"),
    ("kli", "克林贡语"),
    ("hrv", "克罗地亚语"),
    ("que", "克丘亚语"),
    ("kas", "克什米尔语"),
    ("kok", "孔卡尼语"),
    ("kur", "库尔德语"),
    ("lat", "拉丁语"),
    ("lao", "老挝语"),
    ("rom", "罗马尼亚语"),
    ("lag", "拉特加莱语"),
    ("lav", "拉脱维亚语"),
    ("lim", "林堡语"),
    ("lin", "林加拉语"),
    ("lug", "卢干达语"),
    ("ltz", "卢森堡语"),
    ("ruy", "卢森尼亚语"),
    ("kin", "卢旺达语"),
    ("lit", "立陶宛语"),
    ("roh", "罗曼什语"),
    ("ro", "罗姆语"),
    ("loj", "逻辑语"),
    ("may", "马来语"),
    ("bur", "缅甸语"),
    ("mar", "马拉地语"),
    ("mg", "马拉加斯语"),
    ("mal", "马拉雅拉姆语"),
    ("mac", "马其顿语"),
    ("mah", "马绍尔语"),
    ("mai", "迈蒂利语"),
    ("glv", "曼克斯语"),
    ("mau", "毛里求斯克里奥尔语"),
    ("mao", "毛利语"),
    ("ben", "孟加拉语"),
    ("mlt", "马耳他语"),
    ("hmn", "苗语"),
    ("nor", "挪威语"),
    ("nea", "那不勒斯语"),
    ("nbl", "南恩德贝莱语"),
    ("afr", "南非荷兰语"),
    ("sot", "南索托语"),
    ("nep", "尼泊尔语"),
    ("pt", "葡萄牙语"),
    ("pan", "旁遮普语"),
    ("pap", "帕皮阿门托语"),
    ("pus", "普什图语"),
    ("nya", "齐切瓦语"),
    ("twi", "契维语"),
    ("chr", "切罗基语"),
    ("jp", "日语"),
    ("swe", "瑞典语"),
    ("srd", "萨丁尼亚语"),
    ("sm", "萨摩亚语"),
    ("sec", "塞尔维亚-克罗地亚语"),
    ("srp", "塞尔维亚语"),
    ("sol", "桑海语"),
    ("sin", "僧伽罗语"),
    ("epo", "世界语"),
    ("nob", "书面挪威语"),
    ("sk", "斯洛伐克语"),
    ("slo", "斯洛文尼亚语"),
    ("swa", "斯瓦希里语"),
    ("src", "塞尔维亚语（西里尔）"),
    ("som", "索马里语"),
    ("th", "泰语"),
    ("tr", "土耳其语"),
    ("tgk", "塔吉克语"),
    ("tam", "泰米尔语"),
    ("tgl", "他加禄语"),
    ("tir", "提格利尼亚语"),
    ("tel", "泰卢固语"),
    ("tua", "突尼斯阿拉伯语"),
    ("tuk", "土库曼语"),
    ("ukr", "乌克兰语"),
    ("wln", "瓦隆语"),
    ("wel", "威尔士语"),
    ("ven", "文达语"),
    ("wol", "沃洛夫语"),
    ("urd", "乌尔都语"),
    ("spa", "西班牙语"),
    ("heb", "希伯来语"),
    ("el", "希腊语"),
    ("hu", "匈牙利语"),
    ("fry", "西弗里斯语"),
    ("sil", "西里西亚语"),
    ("hil", "希利盖农语"),
    ("los", "下索布语"),
    ("haw", "夏威夷语"),
    ("nno", "新挪威语"),
    ("nqo", "西非书面语"),
    ("snd", "信德语"),
    ("sna", "修纳语"),
    ("ceb", "宿务语"),
    ("syr", "叙利亚语"),
    ("sun", "巽他语"),
    ("en", "英语"),
    ("hi", "印地语"),
    ("id", "印尼语"),
    ("it", "意大利语"),
    ("vie", "越南语"),
    ("yid", "意第绪语"),
    ("ina", "因特语"),
    ("ach", "亚齐语"),
    ("ing", "印古什语"),
    ("ibo", "伊博语"),
    ("ido", "伊多语"),
    ("yor", "约鲁巴语"),
    ("arm", "亚美尼亚语"),
    ("iku", "伊努克提图特语"),
    ("ir", "伊朗语"),
    ("zh", "简体中文"),
    ("cht", "繁体中文"),
    ("wyw", "文言文"),
    ("yue", "中文粤语"),
    ("zaz", "扎扎其语"),
    ("frm", "中古法语"),
    ("zul", "祖鲁语"),
    ("jav", "爪哇语"),
];

/// `(code, name)` pairs the provider accepts.
pub fn languages(provider: ProviderId) -> &'static [(&'static str, &'static str)] {
    match provider {
        ProviderId::Youdao => YOUDAO,
        ProviderId::Microsoft => MICROSOFT,
        ProviderId::Baidu => BAIDU,
    }
}

pub fn is_supported(provider: ProviderId, code: &str) -> bool {
    languages(provider).iter().any(|(c, _)| *c == code)
}
