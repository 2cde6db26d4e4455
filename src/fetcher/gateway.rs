/// Public HTTPS gateways per decentralized storage protocol, in the order they are tried.
const GATEWAYS: &[(&str, &[&str])] = &[
    (
        "ipfs",
        &["ipfs.io", "dweb.link", "w3s.link", "gateway.pinata.cloud"],
    ),
    ("btfs", &["gateway.btfs.io"]),
];

pub(crate) fn gateways_for(protocol: &str) -> Option<&'static [&'static str]> {
    GATEWAYS
        .iter()
        .find(|(known, _)| *known == protocol)
        .map(|(_, hosts)| *hosts)
}

pub(crate) fn gateway_url(host: &str, protocol: &str, suburl: &str) -> String {
    format!("https://{}/{}/{}", host, protocol, suburl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipfs_gateways_keep_their_order() {
        assert_eq!(
            gateways_for("ipfs"),
            Some(&["ipfs.io", "dweb.link", "w3s.link", "gateway.pinata.cloud"][..])
        );
        assert_eq!(gateways_for("btfs"), Some(&["gateway.btfs.io"][..]));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(gateways_for("IPFS"), None);
        assert_eq!(gateways_for("ar"), None);
    }

    #[test]
    fn url_embeds_protocol_as_path_prefix() {
        assert_eq!(
            gateway_url("dweb.link", "ipfs", "bafy/5"),
            "https://dweb.link/ipfs/bafy/5"
        );
    }
}
