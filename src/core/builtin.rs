//! Curated lookup tables behind `Taxonomy::builtin`.
//!
//! Surface words are KJV spellings (verb forms listed separately, no
//! stemming). Concepts group Strong's roots loosely; a root may sit in
//! several concepts.

use crate::core::types::RootId;

const fn h(number: u32) -> RootId {
    RootId::hebrew(number)
}

const fn g(number: u32) -> RootId {
    RootId::greek(number)
}

pub(crate) const WORD_ROOTS: &[(&str, &[RootId])] = &[
    ("god", &[h(410), h(430), g(2316)]),
    ("lord", &[h(136), h(3068), g(2962)]),
    ("almighty", &[h(7706), g(3841)]),
    ("holy", &[h(6918), g(40)]),
    ("spirit", &[h(7307), g(4151)]),
    ("save", &[h(3467), g(4982)]),
    ("saved", &[h(3467), g(4982)]),
    ("salvation", &[h(3444), g(4991)]),
    ("saviour", &[h(3467), g(4990)]),
    ("savior", &[h(3467), g(4990)]),
    ("redeem", &[h(1350), h(6299), g(3084)]),
    ("redeemed", &[h(1350), g(3084)]),
    ("redemption", &[h(1353), g(629)]),
    ("grace", &[h(2580), g(5485)]),
    ("mercy", &[h(2617), g(1656)]),
    ("merciful", &[h(2617), g(1656)]),
    ("compassion", &[h(7355), g(4697)]),
    ("forgive", &[h(5545), g(863)]),
    ("forgiveness", &[h(5547), g(859)]),
    ("faith", &[h(530), g(4102)]),
    ("believe", &[h(539), g(4100)]),
    ("believed", &[h(539), g(4100)]),
    ("believeth", &[h(539), g(4100)]),
    ("trust", &[h(982), g(4100)]),
    ("love", &[h(157), h(160), g(25), g(26)]),
    ("loved", &[h(157), g(25)]),
    ("loveth", &[h(157), g(25)]),
    ("lovingkindness", &[h(2617)]),
    ("sin", &[h(2398), h(2403), g(266)]),
    ("sins", &[h(2398), g(266)]),
    ("sinned", &[h(2398), g(264)]),
    ("sinner", &[h(2400), g(268)]),
    ("iniquity", &[h(5771), g(458)]),
    ("transgression", &[h(6588), g(3900)]),
    ("evil", &[h(7451), g(4190)]),
    ("righteous", &[h(6662), g(1342)]),
    ("righteousness", &[h(6664), g(1343)]),
    ("just", &[h(6662), g(1342)]),
    ("justice", &[h(4941), g(1343)]),
    ("covenant", &[h(1285), g(1242)]),
    ("promise", &[h(1697), g(1860)]),
    ("oath", &[h(7621), g(3727)]),
    ("life", &[h(2416), g(2222)]),
    ("live", &[h(2421), g(2198)]),
    ("death", &[h(4194), g(2288)]),
    ("die", &[h(4191), g(599)]),
    ("eternal", &[h(5769), g(166)]),
    ("everlasting", &[h(5769), g(166)]),
    ("resurrection", &[g(386), g(1453)]),
    ("blood", &[h(1818), g(129)]),
    ("sacrifice", &[h(2077), g(2378)]),
    ("offering", &[h(5930), h(7133), g(4376)]),
    ("atonement", &[h(3722), g(2434)]),
    ("lamb", &[h(3532), g(286), g(721)]),
    ("kingdom", &[h(4438), g(932)]),
    ("king", &[h(4428), g(935)]),
    ("throne", &[h(3678), g(2362)]),
    ("reign", &[h(4427), g(936)]),
    ("messiah", &[h(4899), g(5547)]),
    ("christ", &[g(5547)]),
    ("anointed", &[h(4886), g(5547)]),
    ("son", &[h(1121), g(5207)]),
    ("law", &[h(8451), g(3551)]),
    ("commandment", &[h(4687), g(1785)]),
    ("word", &[h(1697), g(3056)]),
    ("truth", &[h(571), g(225)]),
    ("worship", &[h(7812), g(4352)]),
    ("prayer", &[h(8605), g(4335)]),
    ("praise", &[h(8416), g(136)]),
    ("israel", &[h(3478), g(2474)]),
    ("jerusalem", &[h(3389), g(2419)]),
    ("church", &[g(1577)]),
    ("heaven", &[h(8064), g(3772)]),
    ("earth", &[h(776), g(1093)]),
    ("light", &[h(216), g(5457)]),
    ("darkness", &[h(2822), g(4655)]),
    ("heart", &[h(3820), g(2588)]),
    ("soul", &[h(5315), g(5590)]),
    ("wisdom", &[h(2451), g(4678)]),
    ("knowledge", &[h(1847), g(1108)]),
    ("judgment", &[h(4941), g(2920)]),
    ("judge", &[h(8199), g(2919)]),
    ("wrath", &[h(639), g(3709)]),
    ("saves", &[h(3467), g(4982)]),
    ("saving", &[h(3467), g(4982)]),
    ("sinners", &[h(2400), g(268)]),
    ("perish", &[h(6), g(622)]),
    ("lives", &[h(2416), g(2198)]),
    ("living", &[h(2416), g(2198)]),
    ("dying", &[h(4191), g(599)]),
    ("begotten", &[g(1080), g(3439)]),
    ("world", &[h(8398), g(2889)]),
    ("gave", &[h(5414), g(1325)]),
    ("give", &[h(5414), g(1325)]),
    ("given", &[h(5414), g(1325)]),
    ("blessed", &[h(1288), g(2127)]),
    ("blessing", &[h(1293), g(2129)]),
    ("glory", &[h(3519), g(1391)]),
    ("glorify", &[h(3513), g(1392)]),
    ("endure", &[h(3201), g(5278), g(5281)]),
    ("endurance", &[h(3201), g(5281)]),
    ("endureth", &[g(5278), g(5281)]),
    ("patient", &[g(3114), g(5281)]),
    ("patience", &[h(3201), g(3115), g(5281)]),
    ("persecute", &[h(7291), g(1377)]),
    ("persecuted", &[h(7291), g(1377), g(1559)]),
    ("persecution", &[g(1375), g(1377)]),
    ("persecutions", &[g(1375), g(1377)]),
    ("tribulation", &[h(6862), h(6869), g(2347)]),
    ("tribulations", &[h(6869), g(2347)]),
    ("affliction", &[h(6040), h(6869), g(2347)]),
    ("afflictions", &[h(6040), g(2347)]),
    ("suffer", &[h(5375), g(2553), g(3958)]),
    ("suffered", &[h(5375), g(3958)]),
    ("suffering", &[g(3804), g(3958)]),
    ("sufferings", &[g(3804), g(3958)]),
    ("overcome", &[h(1396), h(3898), g(3528)]),
    ("overcometh", &[g(3528)]),
    ("overcame", &[h(3898), g(3528)]),
    ("conquer", &[h(3898), g(3528)]),
    ("victory", &[h(5331), h(8668), g(3529)]),
    ("trial", &[h(4531), g(3986)]),
    ("trials", &[g(3986)]),
    ("temptation", &[h(4531), g(3986)]),
    ("temptations", &[g(3986)]),
    ("test", &[h(974), g(1381), g(3986)]),
    ("tested", &[h(974), g(3986)]),
    ("saints", &[h(6918), g(40)]),
    ("martyr", &[g(3144)]),
    ("witness", &[h(5707), g(3144)]),
    ("witnesses", &[h(5707), g(3144)]),
    ("testimony", &[h(5715), g(3141)]),
];

pub(crate) const CONCEPT_ROOTS: &[(&str, &[RootId])] = &[
    ("divinity", &[h(136), h(410), h(430), h(433), h(3068), h(5945), h(7706), g(2316), g(2424), g(2962), g(5547)]),
    ("trinity", &[h(430), h(7307), g(2316), g(3962), g(4151), g(5207)]),
    ("holiness", &[h(6918), h(6942), h(6944), g(37), g(38), g(40)]),
    ("glory", &[h(3513), h(3519), g(1391), g(1392)]),
    ("power", &[h(1369), h(3581), h(5797), g(1411), g(1849), g(2904)]),
    ("eternal", &[h(5769), g(165), g(166)]),
    ("salvation", &[h(1350), h(3444), h(3467), h(6299), g(4982), g(4990), g(4991)]),
    ("redemption", &[h(1350), h(3722), h(6299), g(59), g(629), g(3084)]),
    ("atonement", &[h(3722), h(3725), g(2434), g(2435)]),
    ("forgiveness", &[h(5545), h(5547), g(859), g(863)]),
    ("grace", &[h(2580), h(2603), g(5463), g(5485)]),
    ("mercy", &[h(2617), h(7355), g(1656), g(3628)]),
    ("sin", &[h(2398), h(2399), h(2403), h(5771), h(6588), g(264), g(266), g(268)]),
    ("evil", &[h(7451), h(7562), h(7563), g(2556), g(4190)]),
    ("transgression", &[h(5674), h(6588), g(458), g(3900)]),
    ("righteousness", &[h(6662), h(6663), h(6664), h(6666), g(1342), g(1343), g(1344)]),
    ("justice", &[h(4941), h(6664), g(2917), g(2919), g(2920)]),
    ("truth", &[h(530), h(571), g(225), g(227)]),
    ("faith", &[h(530), h(539), h(982), g(4100), g(4102), g(4103)]),
    ("believe", &[h(539), g(4100), g(4102)]),
    ("trust", &[h(539), h(982), g(3982), g(4100)]),
    ("hope", &[h(3176), h(8615), g(1679), g(1680)]),
    ("love", &[h(157), h(160), h(2617), g(25), g(26), g(5368)]),
    ("compassion", &[h(7355), h(7356), g(3628), g(4697)]),
    ("covenant", &[h(1285), g(1242)]),
    ("promise", &[h(1696), g(1860), g(1861)]),
    ("oath", &[h(7621), h(7650), g(3726), g(3727)]),
    ("law", &[h(2706), h(4687), h(8451), g(1785), g(3551)]),
    ("commandment", &[h(4687), h(6680), g(1781), g(1785)]),
    ("word", &[h(561), h(1697), g(3056), g(4487)]),
    ("testimony", &[h(5715), h(5749), g(3140), g(3141)]),
    ("worship", &[h(5647), h(7812), g(3000), g(4352)]),
    ("prayer", &[h(6419), h(8605), g(4335), g(4336)]),
    ("praise", &[h(1984), h(8416), g(134), g(136)]),
    ("sacrifice", &[h(2076), h(2077), h(5930), g(2378), g(4376)]),
    ("spirit", &[h(5315), h(7307), g(4151), g(5590)]),
    ("soul", &[h(5315), g(5590)]),
    ("heart", &[h(3820), h(3824), g(2588)]),
    ("mind", &[h(3820), g(3563), g(5590)]),
    ("life", &[h(2416), h(2421), g(2198), g(2222)]),
    ("death", &[h(4191), h(4194), g(599), g(2288)]),
    ("resurrection", &[g(386), g(450), g(1453)]),
    ("blood", &[h(1818), g(129)]),
    ("kingdom", &[h(4427), h(4428), h(4438), g(932), g(935), g(936)]),
    ("king", &[h(4428), g(935)]),
    ("throne", &[h(3678), g(2362)]),
    ("reign", &[h(4427), h(4910), g(757), g(936)]),
    ("israel", &[h(3478), g(2474)]),
    ("nation", &[h(1471), h(5971), g(1484)]),
    ("church", &[g(1577)]),
    ("people", &[h(1471), h(5971), g(1484), g(2992)]),
    ("messiah", &[h(4899), g(5547)]),
    ("christ", &[g(5547)]),
    ("savior", &[h(3467), g(4990)]),
    ("lord", &[h(113), h(136), h(3068), g(2962)]),
    ("servant", &[h(5647), h(5650), g(1249), g(1401)]),
    ("shepherd", &[h(7462), g(4166)]),
    ("lamb", &[h(3532), h(7716), g(286), g(721)]),
    ("judgment", &[h(4941), h(8199), g(2917), g(2919), g(2920)]),
    ("wrath", &[h(639), h(2534), g(2372), g(3709)]),
    ("punishment", &[h(5771), h(6066), g(2851), g(5098)]),
    ("creation", &[h(1254), h(3335), h(6213), g(2936), g(2937)]),
    ("heaven", &[h(8064), g(3772)]),
    ("earth", &[h(776), g(1093)]),
    ("light", &[h(216), g(5457)]),
    ("darkness", &[h(2822), g(4653), g(4655)]),
    ("blessing", &[h(1288), h(1293), g(2127), g(2129)]),
    ("curse", &[h(779), h(7045), g(2671), g(2672)]),
    ("prophecy", &[h(5012), h(5030), g(4394), g(4395), g(4396)]),
    ("vision", &[h(2377), h(4759), g(3701), g(3705)]),
    ("wisdom", &[h(998), h(2449), h(2451), g(4678), g(4680)]),
    ("knowledge", &[h(1847), h(3045), g(1097), g(1108)]),
    ("understanding", &[h(998), h(8394), g(3563), g(4907)]),
    ("day", &[h(3117), g(2250)]),
    ("end_times", &[h(319), h(7093), g(2078), g(5056)]),
    ("forever", &[h(5703), h(5769), g(165), g(166)]),
    ("persecution", &[h(7291), h(7852), g(1375), g(1377), g(1559)]),
    ("tribulation", &[h(6862), h(6869), h(6887), g(2347)]),
    ("affliction", &[h(6040), h(6869), h(6887), g(2347)]),
    ("suffering", &[h(5375), g(2553), g(3804), g(3958)]),
    ("endurance", &[g(3114), g(3115), g(5278), g(5281)]),
    ("patience", &[h(3201), g(3114), g(3115), g(5281)]),
    ("overcome", &[h(1396), h(3898), h(5329), g(3528)]),
    ("victory", &[h(5331), h(8668), g(3528), g(3529)]),
    ("trial", &[h(974), h(4531), g(1381), g(3986)]),
    ("temptation", &[h(4531), h(5254), g(3986)]),
    ("martyrdom", &[h(5707), g(3141), g(3144)]),
];
