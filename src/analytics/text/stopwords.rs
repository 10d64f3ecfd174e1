/// Portuguese stopwords filtered out of the word cloud. Checked against both
/// the raw token and its stem, since stemming may or may not land on the form
/// listed here.
pub(crate) const STOPWORDS: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às", "até",
    "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos",
    "e", "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "essa", "essas", "esse",
    "esses", "esta", "está", "estamos", "estão", "estas", "estava", "este", "estes", "eu", "foi",
    "fomos", "for", "foram", "fosse", "há", "isso", "isto", "já", "lhe", "lhes", "mais", "mas",
    "me", "mesmo", "meu", "meus", "minha", "minhas", "muito", "na", "não", "nas", "nem", "no",
    "nos", "nós", "nossa", "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou", "para",
    "pela", "pelas", "pelo", "pelos", "por", "qual", "quando", "que", "quem", "são", "se", "seja",
    "sem", "ser", "seu", "seus", "só", "sua", "suas", "também", "te", "tem", "têm", "tenho",
    "teu", "teus", "tinha", "tua", "tuas", "tu", "um", "uma", "você", "vocês", "vos",
];

pub(crate) fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}
